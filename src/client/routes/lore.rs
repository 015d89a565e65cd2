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
            card::{or_placeholder, DASH},
            Card, ListPage, Page, Section, TagList,
        },
        render::{not_found, render_page},
    },
    model::{
        catalog::CatalogKind,
        lore::{LoreDto, LoreSummaryDto},
    },
    server::model::app::AppState,
};

pub fn compare_lore(a: &LoreSummaryDto, b: &LoreSummaryDto) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

#[component]
pub fn LoreList(entries: Vec<LoreSummaryDto>) -> Element {
    rsx! {
        ListPage {
            kind: CatalogKind::Lore,
            count: entries.len(),
            empty_message: "No lore entries yet.".to_string(),
            for entry in entries {
                Card {
                    key: "{entry.slug}",
                    href: format!("/lore/{}", entry.slug),
                    title: entry.title.clone(),
                    subtitle: or_placeholder(entry.era.as_deref(), DASH),
                    p { class: "text-sm opacity-70", "Read entry →" }
                }
            }
        }
    }
}

#[component]
pub fn LoreDetail(entry: LoreDto) -> Element {
    let era = or_placeholder(entry.era.as_deref(), DASH);
    let content = or_placeholder(entry.content.as_deref(), "No entry text yet.");

    rsx! {
        Page { title: entry.title.clone(), query: String::new(),
            div { class: "space-y-6",
                div { class: "space-y-1",
                    a { href: "/lore", class: "link text-sm", "← All lore" }
                    h1 { class: "text-3xl font-bold", "{entry.title}" }
                    p { class: "opacity-80", "{era}" }
                    TagList { tags: entry.tags.clone() }
                }
                Section { title: "Entry".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{content}" }
                }
            }
        }
    }
}

pub async fn lore_list_page(State(state): State<AppState>) -> Response {
    let mut entries = state.api.list_lore().await;
    entries.sort_by(compare_lore);

    render_page(StatusCode::OK, rsx! { LoreList { entries } })
}

pub async fn lore_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.api.get_lore(&slug).await {
        Some(entry) => render_page(StatusCode::OK, rsx! { LoreDetail { entry } }),
        None => not_found(),
    }
}
