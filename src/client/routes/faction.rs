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
        faction::{FactionDto, FactionSummaryDto},
    },
    server::model::app::AppState,
};

pub fn compare_factions(a: &FactionSummaryDto, b: &FactionSummaryDto) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn leader_line(leader: Option<&str>) -> String {
    match leader {
        Some(leader) if !leader.trim().is_empty() => format!("Leader: {}", leader),
        _ => DASH.to_string(),
    }
}

#[component]
pub fn FactionList(factions: Vec<FactionSummaryDto>) -> Element {
    rsx! {
        ListPage {
            kind: CatalogKind::Faction,
            count: factions.len(),
            empty_message: "No factions yet.".to_string(),
            for faction in factions {
                Card {
                    key: "{faction.slug}",
                    href: format!("/factions/{}", faction.slug),
                    title: faction.name.clone(),
                    subtitle: or_placeholder(faction.alignment.as_deref(), DASH),
                    p { class: "text-sm opacity-70",
                        {leader_line(faction.leader.as_deref())}
                    }
                    TagList { tags: faction.tags.clone() }
                }
            }
        }
    }
}

#[component]
pub fn FactionDetail(faction: FactionDto) -> Element {
    let description = or_placeholder(faction.description.as_deref(), "No description yet.");

    rsx! {
        Page { title: faction.name.clone(), query: String::new(),
            div { class: "space-y-6",
                div { class: "space-y-1",
                    a { href: "/factions", class: "link text-sm", "← All factions" }
                    h1 { class: "text-3xl font-bold", "{faction.name}" }
                    p { class: "opacity-80", {leader_line(faction.leader.as_deref())} }
                    TagList { tags: faction.tags.clone() }
                }
                Section { title: "Profile".to_string(),
                    dl { class: "space-y-1",
                        Field { label: "Alignment".to_string(), value: or_placeholder(faction.alignment.as_deref(), DASH) }
                        Field { label: "Purpose".to_string(), value: or_placeholder(faction.purpose.as_deref(), DASH) }
                    }
                }
                Section { title: "Description".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{description}" }
                }
                Section { title: "Members".to_string(),
                    if faction.primary_members.is_empty() {
                        p { class: "opacity-80", "No members yet." }
                    } else {
                        ul { class: "space-y-2",
                            for member in faction.primary_members.clone() {
                                li { key: "{member.slug}", class: "flex flex-wrap gap-2",
                                    a { href: "/characters/{member.slug}", class: "link link-primary font-semibold", "{member.name}" }
                                    span { class: "opacity-80",
                                        {join_present(&[member.callsign.as_deref(), member.role.as_deref()], " — ")}
                                    }
                                    span { class: "text-sm opacity-70",
                                        "Ship: "
                                        {ref_link("ships", member.primary_ship.as_ref())}
                                    }
                                }
                            }
                        }
                    }
                }
                if !faction.ships.is_empty() {
                    Section { title: "Fleet".to_string(),
                        ul { class: "list-disc pl-6",
                            for ship in faction.ships.clone() {
                                li { key: "{ship.slug}",
                                    a { href: "/ships/{ship.slug}", class: "link", "{ship.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub async fn factions_page(State(state): State<AppState>) -> Response {
    let mut factions = state.api.list_factions().await;
    factions.sort_by(compare_factions);

    render_page(StatusCode::OK, rsx! { FactionList { factions } })
}

pub async fn faction_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.api.get_faction(&slug).await {
        Some(faction) => render_page(StatusCode::OK, rsx! { FactionDetail { faction } }),
        None => not_found(),
    }
}
