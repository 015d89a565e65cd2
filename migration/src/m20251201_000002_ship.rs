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
                    .table(Ship::Table)
                    .if_not_exists()
                    .col(pk_auto(Ship::Id))
                    .col(string_uniq(Ship::Slug))
                    .col(string(Ship::Name))
                    .col(string_null(Ship::Nickname))
                    .col(string_null(Ship::Registry))
                    .col(string_null(Ship::Manufacturer))
                    .col(string_null(Ship::Model))
                    .col(string_null(Ship::Type))
                    .col(integer_null(Ship::YearBuilt))
                    .col(text_null(Ship::Specs))
                    .col(text_null(Ship::History))
                    .col(string_null(Ship::ImageUrl))
                    .col(timestamp(Ship::CreatedAt))
                    .col(timestamp(Ship::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(create_join_table(
                "ship_tag",
                JoinSide {
                    column: "ship_id",
                    references: "ship",
                },
                tag_side(),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(drop_join_table("ship_tag")).await?;

        manager
            .drop_table(Table::drop().table(Ship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ship {
    Table,
    Id,
    Slug,
    Name,
    Nickname,
    Registry,
    Manufacturer,
    Model,
    Type,
    YearBuilt,
    Specs,
    History,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
