use sea_orm::DatabaseConnection;

use crate::{
    model::technology::{TechnologyDto, TechnologySummaryDto},
    server::{
        data::catalog::technology::TechnologyRepository, error::Error,
        service::catalog::take_tags,
    },
};

pub struct TechnologyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TechnologyService<'a> {
    /// Creates a new instance of [`TechnologyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<TechnologySummaryDto>, Error> {
        let technology_repo = TechnologyRepository::new(self.db);

        let technology = technology_repo.list().await?;

        Ok(technology
            .into_iter()
            .map(TechnologySummaryDto::from)
            .collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<TechnologyDto>, Error> {
        let technology_repo = TechnologyRepository::new(self.db);

        let technology = match technology_repo.get_by_slug(slug).await? {
            Some(technology) => technology,
            None => return Ok(None),
        };

        let mut tags = technology_repo.get_tags(&[technology.id]).await?;

        Ok(Some(TechnologyDto {
            tags: take_tags(&mut tags, technology.id),
            id: technology.id,
            slug: technology.slug,
            name: technology.name,
            origin_species: technology.origin_species,
            status: technology.status,
            description: technology.description,
            image_url: technology.image_url,
            created_at: technology.created_at,
            updated_at: technology.updated_at,
        }))
    }
}
