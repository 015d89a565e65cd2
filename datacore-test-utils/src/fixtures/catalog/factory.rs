//! Active models with default test values for every catalog table.
//!
//! Display names are derived from the slug (`the-constellation` becomes
//! `The Constellation`) so assertions can be written against either.

use chrono::Utc;
use sea_orm::ActiveValue;

/// Derive a display name from a slug by capitalizing each dash separated word.
pub fn name_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn mock_tag(name: &str) -> entity::tag::ActiveModel {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

pub fn mock_ship(slug: &str) -> entity::ship::ActiveModel {
    entity::ship::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(name_from_slug(slug)),
        nickname: ActiveValue::Set(None),
        registry: ActiveValue::Set(Some("SWV-0001".to_string())),
        manufacturer: ActiveValue::Set(None),
        ship_model: ActiveValue::Set(None),
        ship_type: ActiveValue::Set(Some("Corvette-class".to_string())),
        year_built: ActiveValue::Set(None),
        specs: ActiveValue::Set(None),
        history: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

pub fn mock_faction(slug: &str) -> entity::faction::ActiveModel {
    entity::faction::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(name_from_slug(slug)),
        alignment: ActiveValue::Set(Some("Independent".to_string())),
        leader: ActiveValue::Set(None),
        purpose: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

/// Create a character with priority 0 and the given primary references.
pub fn mock_character(
    slug: &str,
    primary_ship_id: Option<i32>,
    primary_faction_id: Option<i32>,
) -> entity::character::ActiveModel {
    entity::character::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(name_from_slug(slug)),
        callsign: ActiveValue::Set(None),
        role: ActiveValue::Set(None),
        species: ActiveValue::Set(Some("Human".to_string())),
        homeworld: ActiveValue::Set(None),
        bio: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        priority: ActiveValue::Set(0),
        primary_ship_id: ActiveValue::Set(primary_ship_id),
        primary_faction_id: ActiveValue::Set(primary_faction_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

pub fn mock_episode(slug: &str, season: i32, episode: i32) -> entity::episode::ActiveModel {
    entity::episode::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        title: ActiveValue::Set(name_from_slug(slug)),
        season: ActiveValue::Set(season),
        episode: ActiveValue::Set(episode),
        discovery: ActiveValue::Set(None),
        synopsis: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

pub fn mock_location(slug: &str) -> entity::location::ActiveModel {
    entity::location::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(name_from_slug(slug)),
        region: ActiveValue::Set(Some("Outer Rim".to_string())),
        dominant_species: ActiveValue::Set(None),
        primary_language: ActiveValue::Set(None),
        overview: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

pub fn mock_technology(slug: &str) -> entity::technology::ActiveModel {
    entity::technology::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        name: ActiveValue::Set(name_from_slug(slug)),
        origin_species: ActiveValue::Set(None),
        status: ActiveValue::Set(Some("Operational".to_string())),
        description: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

pub fn mock_lore(slug: &str) -> entity::lore::ActiveModel {
    entity::lore::ActiveModel {
        slug: ActiveValue::Set(slug.to_string()),
        title: ActiveValue::Set(name_from_slug(slug)),
        era: ActiveValue::Set(None),
        content: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}
