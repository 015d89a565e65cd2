//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods only queue work; everything runs in order during the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// A character fixture: slug plus optional primary ship and faction slugs.
type CharacterFixture = (String, Option<String>, Option<String>);

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// catalog fixtures and mock API endpoints. Methods can be chained together and
/// finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    tags: Vec<String>,
    ships: Vec<String>,
    factions: Vec<String>,
    characters: Vec<CharacterFixture>,

    // Mock endpoints to create
    api_endpoints: Vec<(String, String, usize)>, // (path, json body, expected_requests)
    failing_api_endpoints: Vec<(String, usize, usize)>, // (path, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures or endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            tags: Vec::new(),
            ships: Vec::new(),
            factions: Vec::new(),
            characters: Vec::new(),
            api_endpoints: Vec::new(),
            failing_api_endpoints: Vec::new(),
        }
    }

    /// Add every catalog table to the test database.
    ///
    /// Creates the eight entity tables followed by all join tables, in foreign key order.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use datacore_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), datacore_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Tag)
    ///     .with_table(Lore)
    ///     .with_table(LoreTag)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock tag into database.
    pub fn with_mock_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    /// Insert mock ship into database.
    pub fn with_mock_ship(mut self, slug: impl Into<String>) -> Self {
        self.ships.push(slug.into());
        self
    }

    /// Insert mock faction into database.
    pub fn with_mock_faction(mut self, slug: impl Into<String>) -> Self {
        self.factions.push(slug.into());
        self
    }

    /// Insert mock character into database.
    ///
    /// The primary ship and faction are created automatically if they were not queued
    /// with `with_mock_ship` / `with_mock_faction`.
    ///
    /// # Arguments
    /// - `slug` - Character slug
    /// - `primary_ship` - Optional slug of the character's primary ship
    /// - `primary_faction` - Optional slug of the character's primary faction
    pub fn with_mock_character(
        mut self,
        slug: impl Into<String>,
        primary_ship: Option<&str>,
        primary_faction: Option<&str>,
    ) -> Self {
        self.characters.push((
            slug.into(),
            primary_ship.map(str::to_string),
            primary_faction.map(str::to_string),
        ));
        self
    }

    /// Add a mock API endpoint answering `GET path` with `body` serialized as JSON.
    ///
    /// # Arguments
    /// - `path` - Request path, e.g. `/api/characters`
    /// - `body` - Response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_api_endpoint<T: serde::Serialize>(
        mut self,
        path: impl Into<String>,
        body: &T,
        expected_requests: usize,
    ) -> Self {
        // Serialization failures surface as an empty body, which the client under test
        // reports as an undecodable response.
        let body = serde_json::to_string(body).unwrap_or_default();
        self.api_endpoints
            .push((path.into(), body, expected_requests));
        self
    }

    /// Add a mock API endpoint answering `GET path` with an error status.
    pub fn with_failing_api_endpoint(
        mut self,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failing_api_endpoints
            .push((path.into(), status, expected_requests));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (catalog tables if requested, then custom tables)
    /// 2. Inserts fixtures (tags, ships, factions, characters)
    /// 3. Creates mock HTTP endpoints (JSON endpoints first, then failing ones)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::Ship),
                schema.create_table_from_entity(entity::prelude::Faction),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Episode),
                schema.create_table_from_entity(entity::prelude::Location),
                schema.create_table_from_entity(entity::prelude::Technology),
                schema.create_table_from_entity(entity::prelude::Lore),
                schema.create_table_from_entity(entity::prelude::CharacterTag),
                schema.create_table_from_entity(entity::prelude::CharacterShip),
                schema.create_table_from_entity(entity::prelude::CharacterFaction),
                schema.create_table_from_entity(entity::prelude::ShipTag),
                schema.create_table_from_entity(entity::prelude::FactionTag),
                schema.create_table_from_entity(entity::prelude::FactionShip),
                schema.create_table_from_entity(entity::prelude::EpisodeTag),
                schema.create_table_from_entity(entity::prelude::EpisodeCast),
                schema.create_table_from_entity(entity::prelude::LocationTag),
                schema.create_table_from_entity(entity::prelude::TechnologyTag),
                schema.create_table_from_entity(entity::prelude::LoreTag),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.tags {
            context.catalog().insert_mock_tag(&name).await?;
        }

        for slug in self.ships {
            context.catalog().insert_mock_ship(&slug).await?;
        }

        for slug in self.factions {
            context.catalog().insert_mock_faction(&slug).await?;
        }

        for (slug, ship, faction) in self.characters {
            let ship_id = match ship {
                Some(ship) => Some(context.catalog().insert_mock_ship(&ship).await?.id),
                None => None,
            };
            let faction_id = match faction {
                Some(faction) => Some(context.catalog().insert_mock_faction(&faction).await?.id),
                None => None,
            };

            context
                .catalog()
                .insert_mock_character(&slug, ship_id, faction_id)
                .await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for (path, body, expected) in self.api_endpoints {
            mocks.push(
                context
                    .api()
                    .create_raw_endpoint(&path, 200, body, expected),
            );
        }

        for (path, status, expected) in self.failing_api_endpoints {
            mocks.push(
                context
                    .api()
                    .create_failing_endpoint(&path, status, expected),
            );
        }

        // Store mocks in the context so they live as long as the test
        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
