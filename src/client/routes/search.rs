use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use dioxus::prelude::*;
use serde::Deserialize;

use crate::{
    client::{
        components::{
            card::{join_present, or_placeholder, ref_name, DASH},
            Card, EmptyState, Page,
        },
        render::render_page,
        search::{search, SearchOutcome, SearchResults},
    },
    server::model::app::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[component]
pub fn SearchPage(outcome: SearchOutcome) -> Element {
    match outcome {
        SearchOutcome::NoQuery => rsx! {
            Page { title: "Search".to_string(), query: String::new(),
                div { class: "space-y-2",
                    h1 { class: "text-3xl font-bold", "Search" }
                    p { class: "opacity-80", "Type something in the search box." }
                }
            }
        },
        SearchOutcome::Results { query, results } => {
            let total = results.total();
            let plural = if total == 1 { "" } else { "s" };

            rsx! {
                Page { title: format!("Search: {}", query), query: query.clone(),
                    div { class: "space-y-6",
                        div {
                            h1 { class: "text-3xl font-bold", "Search Results" }
                            p { class: "opacity-80", "Showing {total} result{plural} for “{query}”" }
                        }
                        if results.is_empty() {
                            EmptyState {
                                message: "No matches found. Try searching by name, callsign, ship, or faction.".to_string(),
                            }
                        } else {
                            SearchGroups { results }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchGroups(results: SearchResults) -> Element {
    rsx! {
        if !results.characters.is_empty() {
            section { class: "space-y-3",
                h2 { class: "text-2xl font-bold", "Characters" }
                div { class: "grid gap-4 sm:grid-cols-2",
                    for character in results.characters.clone() {
                        Card {
                            key: "{character.slug}",
                            href: format!("/characters/{}", character.slug),
                            title: character.name.clone(),
                            subtitle: join_present(&[character.callsign.as_deref(), character.role.as_deref()], " — "),
                            p { class: "text-sm opacity-70",
                                {format!(
                                    "Ship: {} • Faction: {}",
                                    ref_name(character.primary_ship.as_ref()),
                                    ref_name(character.primary_faction.as_ref()),
                                )}
                            }
                        }
                    }
                }
            }
        }
        if !results.ships.is_empty() {
            section { class: "space-y-3",
                h2 { class: "text-2xl font-bold", "Ships" }
                div { class: "grid gap-4 sm:grid-cols-2",
                    for ship in results.ships.clone() {
                        Card {
                            key: "{ship.slug}",
                            href: format!("/ships/{}", ship.slug),
                            title: ship.name.clone(),
                            subtitle: or_placeholder(ship.ship_type.as_deref(), DASH),
                            p { class: "text-sm opacity-70", "Ship" }
                        }
                    }
                }
            }
        }
        if !results.factions.is_empty() {
            section { class: "space-y-3",
                h2 { class: "text-2xl font-bold", "Factions" }
                div { class: "grid gap-4 sm:grid-cols-2",
                    for faction in results.factions.clone() {
                        Card {
                            key: "{faction.slug}",
                            href: format!("/factions/{}", faction.slug),
                            title: faction.name.clone(),
                            subtitle: or_placeholder(faction.alignment.as_deref(), DASH),
                            p { class: "text-sm opacity-70", "Faction" }
                        }
                    }
                }
            }
        }
    }
}

pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let outcome = search(&state.api, params.q.as_deref()).await;

    render_page(StatusCode::OK, rsx! { SearchPage { outcome } })
}
