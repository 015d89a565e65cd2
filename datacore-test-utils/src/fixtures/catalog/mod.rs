use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { context: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub context: &'a TestContext,
}
