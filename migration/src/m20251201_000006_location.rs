use sea_orm_migration::{prelude::*, schema::*};

use crate::join_table::{create_join_table, drop_join_table, tag_side, JoinSide};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(string_uniq(Location::Slug))
                    .col(string(Location::Name))
                    .col(string_null(Location::Region))
                    .col(string_null(Location::DominantSpecies))
                    .col(string_null(Location::PrimaryLanguage))
                    .col(text_null(Location::Overview))
                    .col(text_null(Location::Description))
                    .col(string_null(Location::ImageUrl))
                    .col(timestamp(Location::CreatedAt))
                    .col(timestamp(Location::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(create_join_table(
                "location_tag",
                JoinSide {
                    column: "location_id",
                    references: "location",
                },
                tag_side(),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(drop_join_table("location_tag")).await?;

        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    Slug,
    Name,
    Region,
    DominantSpecies,
    PrimaryLanguage,
    Overview,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
