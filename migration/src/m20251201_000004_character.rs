use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    join_table::{create_join_table, drop_join_table, tag_side, JoinSide},
    m20251201_000002_ship::Ship,
    m20251201_000003_faction::Faction,
};

static IDX_CHARACTER_PRIMARY_SHIP_ID: &str = "idx-character-primary_ship_id";
static IDX_CHARACTER_PRIMARY_FACTION_ID: &str = "idx-character-primary_faction_id";
static FK_CHARACTER_PRIMARY_SHIP_ID: &str = "fk-character-primary_ship_id";
static FK_CHARACTER_PRIMARY_FACTION_ID: &str = "fk-character-primary_faction_id";

fn character_side() -> JoinSide {
    JoinSide {
        column: "character_id",
        references: "character",
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
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_uniq(Character::Slug))
                    .col(string(Character::Name))
                    .col(string_null(Character::Callsign))
                    .col(string_null(Character::Role))
                    .col(string_null(Character::Species))
                    .col(string_null(Character::Homeworld))
                    .col(text_null(Character::Bio))
                    .col(string_null(Character::ImageUrl))
                    .col(integer(Character::Priority).default(0))
                    .col(integer_null(Character::PrimaryShipId))
                    .col(integer_null(Character::PrimaryFactionId))
                    .col(timestamp(Character::CreatedAt))
                    .col(timestamp(Character::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_PRIMARY_SHIP_ID)
                            .from(Character::Table, Character::PrimaryShipId)
                            .to(Ship::Table, Ship::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_PRIMARY_FACTION_ID)
                            .from(Character::Table, Character::PrimaryFactionId)
                            .to(Faction::Table, Faction::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_PRIMARY_SHIP_ID)
                    .table(Character::Table)
                    .col(Character::PrimaryShipId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_PRIMARY_FACTION_ID)
                    .table(Character::Table)
                    .col(Character::PrimaryFactionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(create_join_table(
                "character_tag",
                character_side(),
                tag_side(),
            ))
            .await?;

        manager
            .create_table(create_join_table(
                "character_ship",
                character_side(),
                JoinSide {
                    column: "ship_id",
                    references: "ship",
                },
            ))
            .await?;

        manager
            .create_table(create_join_table(
                "character_faction",
                character_side(),
                JoinSide {
                    column: "faction_id",
                    references: "faction",
                },
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(drop_join_table("character_faction")).await?;
        manager.drop_table(drop_join_table("character_ship")).await?;
        manager.drop_table(drop_join_table("character_tag")).await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_PRIMARY_FACTION_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_PRIMARY_SHIP_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Slug,
    Name,
    Callsign,
    Role,
    Species,
    Homeworld,
    Bio,
    ImageUrl,
    Priority,
    PrimaryShipId,
    PrimaryFactionId,
    CreatedAt,
    UpdatedAt,
}
