use crate::TestContext;

pub mod mockito;

impl TestContext {
    pub fn api<'a>(&'a mut self) -> ApiFixtures<'a> {
        ApiFixtures { context: self }
    }
}

pub struct ApiFixtures<'a> {
    pub context: &'a mut TestContext,
}
