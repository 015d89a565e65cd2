use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    data::catalog::load_related,
    model::db::{CharacterModel, EpisodeModel, TagModel},
};

pub struct EpisodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EpisodeRepository<'a, C> {
    /// Creates a new instance of [`EpisodeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns all episodes in broadcast order
    pub async fn list(&self) -> Result<Vec<EpisodeModel>, DbErr> {
        entity::prelude::Episode::find()
            .order_by_asc(entity::episode::Column::Season)
            .order_by_asc(entity::episode::Column::Episode)
            .all(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<EpisodeModel>, DbErr> {
        entity::prelude::Episode::find()
            .filter(entity::episode::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn get_tags(
        &self,
        episode_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<TagModel>>, DbErr> {
        load_related::<_, entity::prelude::EpisodeTag, entity::prelude::Tag, _>(
            self.db,
            entity::episode_tag::Column::EpisodeId,
            episode_ids,
            entity::tag::Column::Name,
            |link| link.episode_id,
        )
        .await
    }

    /// Main cast of each of the provided episodes, ordered by name
    pub async fn get_cast(
        &self,
        episode_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<CharacterModel>>, DbErr> {
        load_related::<_, entity::prelude::EpisodeCast, entity::prelude::Character, _>(
            self.db,
            entity::episode_cast::Column::EpisodeId,
            episode_ids,
            entity::character::Column::Name,
            |link| link.episode_id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {

    mod list {
        use datacore_test_utils::prelude::*;

        use crate::server::data::catalog::episode::EpisodeRepository;

        /// Expect episodes ordered by season, then episode number
        #[tokio::test]
        async fn orders_by_season_then_episode() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            test.catalog().insert_mock_episode("s2e1", 2, 1).await?;
            test.catalog().insert_mock_episode("s1e2", 1, 2).await?;
            test.catalog().insert_mock_episode("s1e1", 1, 1).await?;

            let episode_repo = EpisodeRepository::new(&test.db);
            let episodes = episode_repo.list().await?;

            let slugs: Vec<&str> = episodes.iter().map(|e| e.slug.as_str()).collect();
            assert_eq!(slugs, vec!["s1e1", "s1e2", "s2e1"]);

            Ok(())
        }
    }

    mod get_cast {
        use datacore_test_utils::prelude::*;

        use crate::server::data::catalog::episode::EpisodeRepository;

        /// Expect the main cast ordered by name regardless of priority
        #[tokio::test]
        async fn orders_cast_by_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;
            let episode = test.catalog().insert_mock_episode("pilot", 1, 1).await?;
            let sora = test
                .catalog()
                .insert_mock_character_with_priority("sora-caddell", 9)
                .await?;
            let gavin = test
                .catalog()
                .insert_mock_character_with_priority("gavin-cross", 0)
                .await?;
            test.catalog().add_to_cast(episode.id, sora.id).await?;
            test.catalog().add_to_cast(episode.id, gavin.id).await?;

            let episode_repo = EpisodeRepository::new(&test.db);
            let cast = episode_repo.get_cast(&[episode.id]).await?;

            let slugs: Vec<&str> = cast[&episode.id].iter().map(|c| c.slug.as_str()).collect();
            assert_eq!(slugs, vec!["gavin-cross", "sora-caddell"]);

            Ok(())
        }
    }
}
