use sea_orm::DatabaseConnection;

use crate::{
    model::faction::{FactionDto, FactionMemberDto, FactionSummaryDto},
    server::{
        data::catalog::{
            character::CharacterRepository, faction::FactionRepository, ship::ShipRepository,
        },
        error::Error,
        service::catalog::{distinct_ids, index_refs, take_refs, take_tags},
    },
};

pub struct FactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionService<'a> {
    /// Creates a new instance of [`FactionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every faction with its tags, ordered by name.
    pub async fn list(&self) -> Result<Vec<FactionSummaryDto>, Error> {
        let faction_repo = FactionRepository::new(self.db);

        let factions = faction_repo.list().await?;
        let faction_ids: Vec<i32> = factions.iter().map(|f| f.id).collect();
        let mut tags = faction_repo.get_tags(&faction_ids).await?;

        Ok(factions
            .into_iter()
            .map(|faction| FactionSummaryDto {
                tags: take_tags(&mut tags, faction.id),
                id: faction.id,
                slug: faction.slug,
                name: faction.name,
                alignment: faction.alignment,
                leader: faction.leader,
            })
            .collect())
    }

    /// Retrieves a faction with its primary members, fleet and tags.
    ///
    /// Members are the characters whose primary faction is this one, ordered by priority
    /// descending then name, each with a reference to their own primary ship.
    ///
    /// # Returns
    /// - `Ok(Some(FactionDto))` - Faction found
    /// - `Ok(None)` - No faction has this slug
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<FactionDto>, Error> {
        let faction_repo = FactionRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let ship_repo = ShipRepository::new(self.db);

        let faction = match faction_repo.get_by_slug(slug).await? {
            Some(faction) => faction,
            None => return Ok(None),
        };

        let members = character_repo.get_by_primary_faction(faction.id).await?;
        let member_ships = index_refs(
            ship_repo
                .get_by_ids(&distinct_ids(members.iter().map(|c| c.primary_ship_id)))
                .await?,
            |ship| ship.id,
        );
        let primary_members = members
            .into_iter()
            .map(|member| FactionMemberDto {
                primary_ship: member
                    .primary_ship_id
                    .and_then(|id| member_ships.get(&id).cloned()),
                slug: member.slug,
                name: member.name,
                callsign: member.callsign,
                role: member.role,
            })
            .collect();

        let mut tags = faction_repo.get_tags(&[faction.id]).await?;
        let mut ships = faction_repo.get_ships(&[faction.id]).await?;

        Ok(Some(FactionDto {
            primary_members,
            ships: take_refs(&mut ships, faction.id),
            tags: take_tags(&mut tags, faction.id),
            id: faction.id,
            slug: faction.slug,
            name: faction.name,
            alignment: faction.alignment,
            leader: faction.leader,
            purpose: faction.purpose,
            description: faction.description,
            created_at: faction.created_at,
            updated_at: faction.updated_at,
        }))
    }
}

#[cfg(test)]
mod tests {
    use datacore_test_utils::prelude::*;

    use crate::server::service::catalog::faction::FactionService;

    /// Expect members with their primary ship and the faction fleet
    #[tokio::test]
    async fn loads_members_and_fleet() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_character("gavin-cross", Some("the-constellation"), Some("veil"))
            .with_mock_character("rook-adair", None, Some("specters-of-the-rift"))
            .build()
            .await?;
        let veil = test.catalog().insert_mock_faction("veil").await?;
        let ship = test.catalog().insert_mock_ship("the-constellation").await?;
        test.catalog().link_faction_ship(veil.id, ship.id).await?;

        let faction_service = FactionService::new(&test.db);
        let faction = faction_service
            .get_by_slug("veil")
            .await
            .unwrap()
            .expect("faction should exist");

        assert_eq!(faction.primary_members.len(), 1);
        assert_eq!(
            faction.primary_members[0]
                .primary_ship
                .as_ref()
                .map(|s| s.slug.as_str()),
            Some("the-constellation")
        );
        assert_eq!(faction.ships.len(), 1);

        Ok(())
    }

    /// Expect None for an unknown slug
    #[tokio::test]
    async fn returns_none_for_unknown_slug() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;

        let faction_service = FactionService::new(&test.db);
        let result = faction_service.get_by_slug("nobody").await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }
}
