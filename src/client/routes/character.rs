use std::cmp::Ordering;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            card::{join_present, or_placeholder, ref_link, ref_name, DASH},
            Card, Field, ListPage, Page, Section, TagList,
        },
        render::{not_found, render_page},
    },
    model::{
        catalog::CatalogKind,
        character::{CharacterDto, CharacterSummaryDto},
    },
    server::model::app::AppState,
};

/// Highest priority first, then by name ignoring case
pub fn compare_characters(a: &CharacterSummaryDto, b: &CharacterSummaryDto) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

#[component]
pub fn CharacterList(characters: Vec<CharacterSummaryDto>) -> Element {
    rsx! {
        ListPage {
            kind: CatalogKind::Character,
            count: characters.len(),
            empty_message: "No characters yet. Run your seed.".to_string(),
            for character in characters {
                CharacterCard { key: "{character.slug}", character }
            }
        }
    }
}

#[component]
fn CharacterCard(character: CharacterSummaryDto) -> Element {
    let subtitle = or_placeholder(
        Some(&join_present(
            &[character.callsign.as_deref(), character.role.as_deref()],
            " — ",
        )),
        DASH,
    );
    let ship = ref_name(character.primary_ship.as_ref());
    let faction = ref_name(character.primary_faction.as_ref());

    rsx! {
        Card {
            href: format!("/characters/{}", character.slug),
            title: character.name.clone(),
            subtitle,
            div { class: "text-sm opacity-80",
                div { "Ship: {ship}" }
                div { "Faction: {faction}" }
            }
            TagList { tags: character.tags.clone() }
        }
    }
}

#[component]
pub fn CharacterDetail(character: CharacterDto) -> Element {
    let subtitle = or_placeholder(
        Some(&join_present(&[character.callsign.as_deref(), character.role.as_deref()], " — ")),
        DASH,
    );
    let origin = or_placeholder(
        Some(&join_present(
            &[character.species.as_deref(), character.homeworld.as_deref()],
            " • ",
        )),
        DASH,
    );
    let bio = or_placeholder(character.bio.as_deref(), "No bio yet.");

    rsx! {
        Page { title: character.name.clone(), query: String::new(),
            div { class: "space-y-6",
                div { class: "space-y-1",
                    a { href: "/characters", class: "link text-sm", "← All characters" }
                    h1 { class: "text-3xl font-bold", "{character.name}" }
                    p { class: "opacity-80", "{subtitle}" }
                    p { class: "text-sm opacity-70", "{origin}" }
                    TagList { tags: character.tags.clone() }
                }
                Section { title: "Assignment".to_string(),
                    dl { class: "space-y-1",
                        div { class: "flex gap-2",
                            dt { class: "font-semibold opacity-70", "Primary ship:" }
                            dd { {ref_link("ships", character.primary_ship.as_ref())} }
                        }
                        div { class: "flex gap-2",
                            dt { class: "font-semibold opacity-70", "Primary faction:" }
                            dd { {ref_link("factions", character.primary_faction.as_ref())} }
                        }
                        Field { label: "Priority".to_string(), value: character.priority.to_string() }
                    }
                }
                if !character.ships.is_empty() || !character.factions.is_empty() {
                    Section { title: "Affiliations".to_string(),
                        ul { class: "list-disc pl-6",
                            for ship in character.ships.clone() {
                                li { key: "ship-{ship.slug}",
                                    "Ship: "
                                    a { href: "/ships/{ship.slug}", class: "link", "{ship.name}" }
                                }
                            }
                            for faction in character.factions.clone() {
                                li { key: "faction-{faction.slug}",
                                    "Faction: "
                                    a { href: "/factions/{faction.slug}", class: "link", "{faction.name}" }
                                }
                            }
                        }
                    }
                }
                Section { title: "Biography".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{bio}" }
                }
            }
        }
    }
}

pub async fn characters_page(State(state): State<AppState>) -> Response {
    let mut characters = state.api.list_characters().await;
    characters.sort_by(compare_characters);

    render_page(StatusCode::OK, rsx! { CharacterList { characters } })
}

pub async fn character_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.api.get_character(&slug).await {
        Some(character) => render_page(StatusCode::OK, rsx! { CharacterDetail { character } }),
        None => not_found(),
    }
}
