use sea_orm::DatabaseConnection;

use crate::{
    model::location::{LocationDto, LocationSummaryDto},
    server::{
        data::catalog::location::LocationRepository, error::Error,
        service::catalog::take_tags,
    },
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    /// Creates a new instance of [`LocationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<LocationSummaryDto>, Error> {
        let location_repo = LocationRepository::new(self.db);

        let locations = location_repo.list().await?;

        Ok(locations.into_iter().map(LocationSummaryDto::from).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<LocationDto>, Error> {
        let location_repo = LocationRepository::new(self.db);

        let location = match location_repo.get_by_slug(slug).await? {
            Some(location) => location,
            None => return Ok(None),
        };

        let mut tags = location_repo.get_tags(&[location.id]).await?;

        Ok(Some(LocationDto {
            tags: take_tags(&mut tags, location.id),
            id: location.id,
            slug: location.slug,
            name: location.name,
            region: location.region,
            dominant_species: location.dominant_species,
            primary_language: location.primary_language,
            overview: location.overview,
            description: location.description,
            image_url: location.image_url,
            created_at: location.created_at,
            updated_at: location.updated_at,
        }))
    }
}
