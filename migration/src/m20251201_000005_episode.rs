use sea_orm_migration::{prelude::*, schema::*};

use crate::join_table::{create_join_table, drop_join_table, tag_side, JoinSide};

static IDX_EPISODE_SEASON_EPISODE: &str = "idx-episode-season-episode";

fn episode_side() -> JoinSide {
    JoinSide {
        column: "episode_id",
        references: "episode",
    }
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Episode::Table)
                    .if_not_exists()
                    .col(pk_auto(Episode::Id))
                    .col(string_uniq(Episode::Slug))
                    .col(string(Episode::Title))
                    .col(integer(Episode::Season))
                    .col(integer(Episode::Episode))
                    .col(text_null(Episode::Discovery))
                    .col(text_null(Episode::Synopsis))
                    .col(string_null(Episode::ImageUrl))
                    .col(timestamp(Episode::CreatedAt))
                    .col(timestamp(Episode::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EPISODE_SEASON_EPISODE)
                    .table(Episode::Table)
                    .col(Episode::Season)
                    .col(Episode::Episode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(create_join_table("episode_tag", episode_side(), tag_side()))
            .await?;

        manager
            .create_table(create_join_table(
                "episode_cast",
                episode_side(),
                JoinSide {
                    column: "character_id",
                    references: "character",
                },
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(drop_join_table("episode_cast")).await?;
        manager.drop_table(drop_join_table("episode_tag")).await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EPISODE_SEASON_EPISODE)
                    .table(Episode::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Episode::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Episode {
    Table,
    Id,
    Slug,
    Title,
    Season,
    Episode,
    Discovery,
    Synopsis,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
