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
                    .table(Technology::Table)
                    .if_not_exists()
                    .col(pk_auto(Technology::Id))
                    .col(string_uniq(Technology::Slug))
                    .col(string(Technology::Name))
                    .col(string_null(Technology::OriginSpecies))
                    .col(string_null(Technology::Status))
                    .col(text_null(Technology::Description))
                    .col(string_null(Technology::ImageUrl))
                    .col(timestamp(Technology::CreatedAt))
                    .col(timestamp(Technology::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(create_join_table(
                "technology_tag",
                JoinSide {
                    column: "technology_id",
                    references: "technology",
                },
                tag_side(),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(drop_join_table("technology_tag")).await?;

        manager
            .drop_table(Table::drop().table(Technology::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Technology {
    Table,
    Id,
    Slug,
    Name,
    OriginSpecies,
    Status,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
