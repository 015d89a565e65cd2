use sea_orm::DatabaseConnection;

use crate::{
    model::lore::{LoreDto, LoreSummaryDto},
    server::{data::catalog::lore::LoreRepository, error::Error, service::catalog::take_tags},
};

pub struct LoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoreService<'a> {
    /// Creates a new instance of [`LoreService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<LoreSummaryDto>, Error> {
        let lore_repo = LoreRepository::new(self.db);

        let entries = lore_repo.list().await?;

        Ok(entries.into_iter().map(LoreSummaryDto::from).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<LoreDto>, Error> {
        let lore_repo = LoreRepository::new(self.db);

        let lore = match lore_repo.get_by_slug(slug).await? {
            Some(lore) => lore,
            None => return Ok(None),
        };

        let mut tags = lore_repo.get_tags(&[lore.id]).await?;

        Ok(Some(LoreDto {
            tags: take_tags(&mut tags, lore.id),
            id: lore.id,
            slug: lore.slug,
            title: lore.title,
            era: lore.era,
            content: lore.content,
            image_url: lore.image_url,
            created_at: lore.created_at,
            updated_at: lore.updated_at,
        }))
    }
}
