//! Free-text search across characters, ships and factions.
//!
//! The three lists are fetched concurrently from the API and filtered in memory with a
//! case-insensitive substring match. Each group keeps the order the API returned.

use crate::{
    client::api::ApiClient,
    model::{
        catalog::{EntityRefDto, TagDto},
        character::CharacterSummaryDto,
        faction::FactionSummaryDto,
        ship::ShipSummaryDto,
    },
};

/// Matches grouped by kind
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    pub characters: Vec<CharacterSummaryDto>,
    pub ships: Vec<ShipSummaryDto>,
    pub factions: Vec<FactionSummaryDto>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.characters.len() + self.ships.len() + self.factions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The query was empty or whitespace
    NoQuery,
    Results {
        /// Trimmed query as typed, used for display
        query: String,
        results: SearchResults,
    },
}

/// Trim the raw query, returning `None` when nothing is left
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    let trimmed = raw.unwrap_or_default().trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn contains(value: Option<&str>, needle: &str) -> bool {
    value.unwrap_or_default().to_lowercase().contains(needle)
}

fn ref_contains(value: Option<&EntityRefDto>, needle: &str) -> bool {
    contains(value.map(|r| r.name.as_str()), needle)
}

fn tags_contain(tags: &[TagDto], needle: &str) -> bool {
    tags.iter().any(|tag| contains(Some(&tag.name), needle))
}

pub fn character_matches(character: &CharacterSummaryDto, needle: &str) -> bool {
    contains(Some(&character.name), needle)
        || contains(character.callsign.as_deref(), needle)
        || contains(character.role.as_deref(), needle)
        || ref_contains(character.primary_ship.as_ref(), needle)
        || ref_contains(character.primary_faction.as_ref(), needle)
        || tags_contain(&character.tags, needle)
}

pub fn ship_matches(ship: &ShipSummaryDto, needle: &str) -> bool {
    contains(Some(&ship.name), needle)
        || contains(ship.ship_type.as_deref(), needle)
        || tags_contain(&ship.tags, needle)
}

pub fn faction_matches(faction: &FactionSummaryDto, needle: &str) -> bool {
    contains(Some(&faction.name), needle)
        || contains(faction.alignment.as_deref(), needle)
        || tags_contain(&faction.tags, needle)
}

/// Filter already fetched lists against `query`
pub fn filter(
    query: &str,
    characters: Vec<CharacterSummaryDto>,
    ships: Vec<ShipSummaryDto>,
    factions: Vec<FactionSummaryDto>,
) -> SearchOutcome {
    let Some(query) = normalize_query(Some(query)) else {
        return SearchOutcome::NoQuery;
    };
    let needle = query.to_lowercase();

    let results = SearchResults {
        characters: characters
            .into_iter()
            .filter(|c| character_matches(c, &needle))
            .collect(),
        ships: ships
            .into_iter()
            .filter(|s| ship_matches(s, &needle))
            .collect(),
        factions: factions
            .into_iter()
            .filter(|f| faction_matches(f, &needle))
            .collect(),
    };

    SearchOutcome::Results { query, results }
}

/// Fetch the three lists concurrently and filter them
///
/// An empty query short-circuits to [`SearchOutcome::NoQuery`] without any request.
pub async fn search(api: &ApiClient, raw: Option<&str>) -> SearchOutcome {
    let Some(query) = normalize_query(raw) else {
        return SearchOutcome::NoQuery;
    };

    let (characters, ships, factions) = tokio::join!(
        api.list_characters(),
        api.list_ships(),
        api.list_factions()
    );

    filter(&query, characters, ships, factions)
}
