use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    data::catalog::load_related,
    model::db::{LocationModel, TagModel},
};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    /// Creates a new instance of [`LocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<LocationModel>, DbErr> {
        entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<LocationModel>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn get_tags(
        &self,
        location_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<TagModel>>, DbErr> {
        load_related::<_, entity::prelude::LocationTag, entity::prelude::Tag, _>(
            self.db,
            entity::location_tag::Column::LocationId,
            location_ids,
            entity::tag::Column::Name,
            |link| link.location_id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use datacore_test_utils::prelude::*;

    use crate::server::data::catalog::location::LocationRepository;

    /// Expect the row count of the list to match the table
    #[tokio::test]
    async fn lists_every_location() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        test.catalog().insert_mock_location("vesper-station").await?;
        test.catalog().insert_mock_location("ardent-reach").await?;

        let location_repo = LocationRepository::new(&test.db);
        let locations = location_repo.list().await?;

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].slug, "ardent-reach");

        Ok(())
    }
}
