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
                    .table(Lore::Table)
                    .if_not_exists()
                    .col(pk_auto(Lore::Id))
                    .col(string_uniq(Lore::Slug))
                    .col(string(Lore::Title))
                    .col(string_null(Lore::Era))
                    .col(text_null(Lore::Content))
                    .col(string_null(Lore::ImageUrl))
                    .col(timestamp(Lore::CreatedAt))
                    .col(timestamp(Lore::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(create_join_table(
                "lore_tag",
                JoinSide {
                    column: "lore_id",
                    references: "lore",
                },
                tag_side(),
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(drop_join_table("lore_tag")).await?;

        manager
            .drop_table(Table::drop().table(Lore::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Lore {
    Table,
    Id,
    Slug,
    Title,
    Era,
    Content,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
