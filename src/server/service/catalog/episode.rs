use sea_orm::DatabaseConnection;

use crate::{
    model::episode::{EpisodeDto, EpisodeSummaryDto},
    server::{
        data::catalog::episode::EpisodeRepository,
        error::Error,
        service::catalog::{take_refs, take_tags},
    },
};

pub struct EpisodeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EpisodeService<'a> {
    /// Creates a new instance of [`EpisodeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every episode by season, then episode number. No associations are loaded.
    pub async fn list(&self) -> Result<Vec<EpisodeSummaryDto>, Error> {
        let episode_repo = EpisodeRepository::new(self.db);

        let episodes = episode_repo.list().await?;

        Ok(episodes.into_iter().map(EpisodeSummaryDto::from).collect())
    }

    /// Retrieves an episode with its main cast (ordered by name) and tags.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<EpisodeDto>, Error> {
        let episode_repo = EpisodeRepository::new(self.db);

        let episode = match episode_repo.get_by_slug(slug).await? {
            Some(episode) => episode,
            None => return Ok(None),
        };

        let mut tags = episode_repo.get_tags(&[episode.id]).await?;
        let mut cast = episode_repo.get_cast(&[episode.id]).await?;

        Ok(Some(EpisodeDto {
            main_cast: take_refs(&mut cast, episode.id),
            tags: take_tags(&mut tags, episode.id),
            id: episode.id,
            slug: episode.slug,
            title: episode.title,
            season: episode.season,
            episode: episode.episode,
            discovery: episode.discovery,
            synopsis: episode.synopsis,
            image_url: episode.image_url,
            created_at: episode.created_at,
            updated_at: episode.updated_at,
        }))
    }
}

#[cfg(test)]
mod tests {
    use datacore_test_utils::prelude::*;

    use crate::server::service::catalog::episode::EpisodeService;

    /// Expect the main cast and tags on the episode detail
    #[tokio::test]
    async fn loads_cast_and_tags() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_character("gavin-cross", None, None)
            .build()
            .await?;
        let episode = test.catalog().insert_mock_episode("first-light", 1, 1).await?;
        let gavin = test
            .catalog()
            .insert_mock_character("gavin-cross", None, None)
            .await?;
        let tag = test.catalog().insert_mock_tag("premiere").await?;
        test.catalog().add_to_cast(episode.id, gavin.id).await?;
        test.catalog().tag_episode(episode.id, tag.id).await?;

        let episode_service = EpisodeService::new(&test.db);
        let detail = episode_service
            .get_by_slug("first-light")
            .await
            .unwrap()
            .expect("episode should exist");

        assert_eq!(detail.main_cast[0].name, "Gavin Cross");
        assert_eq!(detail.tags[0].name, "premiere");

        Ok(())
    }

    /// Expect the list length to match the number of rows
    #[tokio::test]
    async fn lists_every_episode() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        test.catalog().insert_mock_episode("first-light", 1, 1).await?;
        test.catalog().insert_mock_episode("dark-water", 1, 2).await?;

        let episode_service = EpisodeService::new(&test.db);
        let episodes = episode_service.list().await.unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].slug, "dark-water");

        Ok(())
    }
}
