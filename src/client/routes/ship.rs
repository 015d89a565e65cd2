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
            card::{join_present, or_placeholder, ref_link, DASH},
            Card, Field, ListPage, Page, Section, TagList,
        },
        render::{not_found, render_page},
    },
    model::{
        catalog::CatalogKind,
        ship::{ShipDto, ShipSummaryDto},
    },
    server::model::app::AppState,
};

pub fn compare_ships(a: &ShipSummaryDto, b: &ShipSummaryDto) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

#[component]
pub fn ShipList(ships: Vec<ShipSummaryDto>) -> Element {
    rsx! {
        ListPage {
            kind: CatalogKind::Ship,
            count: ships.len(),
            empty_message: "No ships yet.".to_string(),
            for ship in ships {
                Card {
                    key: "{ship.slug}",
                    href: format!("/ships/{}", ship.slug),
                    title: ship.name.clone(),
                    subtitle: or_placeholder(ship.ship_type.as_deref(), DASH),
                    p { class: "text-sm opacity-70",
                        {or_placeholder(ship.registry.as_deref(), DASH)}
                    }
                    TagList { tags: ship.tags.clone() }
                }
            }
        }
    }
}

#[component]
pub fn ShipDetail(ship: ShipDto) -> Element {
    let subtitle = or_placeholder(
        Some(&join_present(
            &[ship.nickname.as_deref(), ship.ship_type.as_deref()],
            " — ",
        )),
        DASH,
    );
    let build = or_placeholder(
        Some(&join_present(
            &[ship.manufacturer.as_deref(), ship.model.as_deref()],
            " • ",
        )),
        DASH,
    );
    let year_built = ship
        .year_built
        .map(|year| year.to_string())
        .unwrap_or_else(|| DASH.to_string());
    let specs = or_placeholder(ship.specs.as_deref(), "No specifications yet.");
    let history = or_placeholder(ship.history.as_deref(), "No history yet.");

    rsx! {
        Page { title: ship.name.clone(), query: String::new(),
            div { class: "space-y-6",
                div { class: "space-y-1",
                    a { href: "/ships", class: "link text-sm", "← All ships" }
                    h1 { class: "text-3xl font-bold", "{ship.name}" }
                    p { class: "opacity-80", "{subtitle}" }
                    TagList { tags: ship.tags.clone() }
                }
                Section { title: "Registry".to_string(),
                    dl { class: "space-y-1",
                        Field { label: "Registry".to_string(), value: or_placeholder(ship.registry.as_deref(), DASH) }
                        Field { label: "Built by".to_string(), value: build }
                        Field { label: "Year built".to_string(), value: year_built }
                    }
                }
                Section { title: "Primary crew".to_string(),
                    if ship.primary_crew.is_empty() {
                        p { class: "opacity-80", "No crew assigned yet." }
                    } else {
                        ul { class: "space-y-2",
                            for member in ship.primary_crew.clone() {
                                li { key: "{member.slug}", class: "flex flex-wrap gap-2",
                                    a { href: "/characters/{member.slug}", class: "link link-primary font-semibold", "{member.name}" }
                                    span { class: "opacity-80",
                                        {join_present(&[member.callsign.as_deref(), member.role.as_deref()], " — ")}
                                    }
                                    span { class: "text-sm opacity-70",
                                        "Faction: "
                                        {ref_link("factions", member.primary_faction.as_ref())}
                                    }
                                }
                            }
                        }
                    }
                }
                if !ship.factions.is_empty() {
                    Section { title: "Operated by".to_string(),
                        ul { class: "list-disc pl-6",
                            for faction in ship.factions.clone() {
                                li { key: "{faction.slug}",
                                    a { href: "/factions/{faction.slug}", class: "link", "{faction.name}" }
                                }
                            }
                        }
                    }
                }
                Section { title: "Specifications".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{specs}" }
                }
                Section { title: "History".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{history}" }
                }
            }
        }
    }
}

pub async fn ships_page(State(state): State<AppState>) -> Response {
    let mut ships = state.api.list_ships().await;
    ships.sort_by(compare_ships);

    render_page(StatusCode::OK, rsx! { ShipList { ships } })
}

pub async fn ship_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.api.get_ship(&slug).await {
        Some(ship) => render_page(StatusCode::OK, rsx! { ShipDetail { ship } }),
        None => not_found(),
    }
}
