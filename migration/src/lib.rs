pub use sea_orm_migration::prelude::*;

mod join_table;
mod m20251201_000001_tag;
mod m20251201_000002_ship;
mod m20251201_000003_faction;
mod m20251201_000004_character;
mod m20251201_000005_episode;
mod m20251201_000006_location;
mod m20251201_000007_technology;
mod m20251201_000008_lore;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_tag::Migration),
            Box::new(m20251201_000002_ship::Migration),
            Box::new(m20251201_000003_faction::Migration),
            Box::new(m20251201_000004_character::Migration),
            Box::new(m20251201_000005_episode::Migration),
            Box::new(m20251201_000006_location::Migration),
            Box::new(m20251201_000007_technology::Migration),
            Box::new(m20251201_000008_lore::Migration),
        ]
    }
}
