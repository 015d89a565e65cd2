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
                    .table(Faction::Table)
                    .if_not_exists()
                    .col(pk_auto(Faction::Id))
                    .col(string_uniq(Faction::Slug))
                    .col(string(Faction::Name))
                    .col(string_null(Faction::Alignment))
                    .col(string_null(Faction::Leader))
                    .col(string_null(Faction::Purpose))
                    .col(text_null(Faction::Description))
                    .col(timestamp(Faction::CreatedAt))
                    .col(timestamp(Faction::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(create_join_table(
                "faction_tag",
                JoinSide {
                    column: "faction_id",
                    references: "faction",
                },
                tag_side(),
            ))
            .await?;

        manager
            .create_table(create_join_table(
                "faction_ship",
                JoinSide {
                    column: "faction_id",
                    references: "faction",
                },
                JoinSide {
                    column: "ship_id",
                    references: "ship",
                },
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(drop_join_table("faction_ship")).await?;
        manager.drop_table(drop_join_table("faction_tag")).await?;

        manager
            .drop_table(Table::drop().table(Faction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Faction {
    Table,
    Id,
    Slug,
    Name,
    Alignment,
    Leader,
    Purpose,
    Description,
    CreatedAt,
    UpdatedAt,
}
