//! Canonical catalog records.
//!
//! Seeding upserts every record by slug and replaces its join memberships, so running it
//! any number of times leaves the same rows behind.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{ActiveValue, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::catalog::{
        character::CharacterRepository, faction::FactionRepository, ship::ShipRepository,
        tag::TagRepository,
    },
    error::Error,
};

struct SeedFaction {
    slug: &'static str,
    name: &'static str,
    alignment: &'static str,
    purpose: &'static str,
    description: &'static str,
}

struct SeedCharacter {
    slug: &'static str,
    name: &'static str,
    callsign: Option<&'static str>,
    role: &'static str,
    species: &'static str,
    homeworld: &'static str,
    bio: &'static str,
    priority: i32,
}

const SHIP_SLUG: &str = "the-constellation";
const PRIMARY_FACTION_SLUG: &str = "veil";

const FACTIONS: [SeedFaction; 2] = [
    SeedFaction {
        slug: "veil",
        name: "V.E.I.L.",
        alignment: "Accord-aligned",
        purpose: "Voidborne Espionage & Infiltration Legion",
        description: "Elite special forces unit specializing in covert operations, infiltration, and deep-space espionage.",
    },
    SeedFaction {
        slug: "specters-of-the-rift",
        name: "Specters of the Rift",
        alignment: "Hostile",
        purpose: "Rift-cult raiders seeking Arcwave-related tech",
        description: "A ruthless faction that believes in their divine right to control Arcwave secrets and the mythical Threadspace it unlocks.",
    },
];

const CHARACTERS: [SeedCharacter; 3] = [
    SeedCharacter {
        slug: "gavin-cross",
        name: "Gavin Cross",
        callsign: Some("Cross"),
        role: "Captain",
        species: "Human",
        homeworld: "Mars",
        bio: "Former VEIL operative and captain of the Constellation.",
        priority: 100,
    },
    SeedCharacter {
        slug: "sora-caddell",
        name: "Sora Caddell",
        callsign: None,
        role: "XO",
        species: "Human (Veltheri-descended)",
        homeworld: "Veltheris",
        bio: "A survivor of the Celestial Queen incident, now aboard the Constellation.",
        priority: 90,
    },
    SeedCharacter {
        slug: "levi-rosko-roskins",
        name: "Levi \"Rosko\" Roskins",
        callsign: None,
        role: "Security / Combat",
        species: "Human",
        homeworld: "Mars",
        bio: "A grounded, reliable combatant with a southern-inspired edge.",
        priority: 80,
    },
];

/// Number of records written by one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub tags: usize,
    pub ships: usize,
    pub factions: usize,
    pub characters: usize,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the canonical tags, ship, factions and crew inside a single transaction.
    ///
    /// # Returns
    /// - `Ok(SeedSummary)` - Number of records written per kind
    /// - `Err(Error::DbErr)` - Any statement failed; the transaction is rolled back
    pub async fn seed(&self) -> Result<SeedSummary, Error> {
        let txn = self.db.begin().await?;

        let tag_repo = TagRepository::new(&txn);
        let ship_repo = ShipRepository::new(&txn);
        let faction_repo = FactionRepository::new(&txn);
        let character_repo = CharacterRepository::new(&txn);

        let crew_tag = tag_repo.get_or_create("crew").await?;
        let ship_tag = tag_repo.get_or_create("ship").await?;
        let faction_tag = tag_repo.get_or_create("faction").await?;

        let now = Utc::now().naive_utc();

        let constellation = ship_repo
            .upsert(entity::ship::ActiveModel {
                slug: ActiveValue::Set(SHIP_SLUG.to_string()),
                name: ActiveValue::Set("The Constellation".to_string()),
                nickname: ActiveValue::Set(Some("Constellation".to_string())),
                registry: ActiveValue::Set(Some("ISV-31835".to_string())),
                manufacturer: ActiveValue::Set(Some("Zenith Archforge Shipworks".to_string())),
                ship_model: ActiveValue::Set(Some("ISV Platform".to_string())),
                ship_type: ActiveValue::Set(Some("Corvette-class".to_string())),
                year_built: ActiveValue::Set(Some(22107)),
                specs: ActiveValue::Set(None),
                history: ActiveValue::Set(None),
                image_url: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .await?;
        ship_repo.set_tags(constellation.id, &[ship_tag.id]).await?;

        let mut primary_faction_id = None;
        for seed in &FACTIONS {
            let faction = faction_repo
                .upsert(entity::faction::ActiveModel {
                    slug: ActiveValue::Set(seed.slug.to_string()),
                    name: ActiveValue::Set(seed.name.to_string()),
                    alignment: ActiveValue::Set(Some(seed.alignment.to_string())),
                    leader: ActiveValue::Set(None),
                    purpose: ActiveValue::Set(Some(seed.purpose.to_string())),
                    description: ActiveValue::Set(Some(seed.description.to_string())),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                })
                .await?;
            faction_repo.set_tags(faction.id, &[faction_tag.id]).await?;

            if faction.slug == PRIMARY_FACTION_SLUG {
                primary_faction_id = Some(faction.id);
            }
        }

        for seed in &CHARACTERS {
            let character = character_repo
                .upsert(entity::character::ActiveModel {
                    slug: ActiveValue::Set(seed.slug.to_string()),
                    name: ActiveValue::Set(seed.name.to_string()),
                    callsign: ActiveValue::Set(seed.callsign.map(str::to_string)),
                    role: ActiveValue::Set(Some(seed.role.to_string())),
                    species: ActiveValue::Set(Some(seed.species.to_string())),
                    homeworld: ActiveValue::Set(Some(seed.homeworld.to_string())),
                    bio: ActiveValue::Set(Some(seed.bio.to_string())),
                    image_url: ActiveValue::Set(None),
                    priority: ActiveValue::Set(seed.priority),
                    primary_ship_id: ActiveValue::Set(Some(constellation.id)),
                    primary_faction_id: ActiveValue::Set(primary_faction_id),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                })
                .await?;

            character_repo
                .set_tags(character.id, &[crew_tag.id])
                .await?;
            character_repo
                .set_ships(character.id, &[constellation.id])
                .await?;
            character_repo
                .set_factions(character.id, primary_faction_id.as_slice())
                .await?;
        }

        txn.commit().await?;

        let summary = SeedSummary {
            tags: 3,
            ships: 1,
            factions: FACTIONS.len(),
            characters: CHARACTERS.len(),
        };
        tracing::info!(
            "Seeded catalog: {} tags, {} ships, {} factions, {} characters",
            summary.tags,
            summary.ships,
            summary.factions,
            summary.characters
        );

        Ok(summary)
    }
}
