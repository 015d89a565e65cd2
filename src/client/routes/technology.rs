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
            Card, Field, ListPage, Page, Section, TagList,
        },
        render::{not_found, render_page},
    },
    model::{
        catalog::CatalogKind,
        technology::{TechnologyDto, TechnologySummaryDto},
    },
    server::model::app::AppState,
};

pub fn compare_technology(a: &TechnologySummaryDto, b: &TechnologySummaryDto) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

#[component]
pub fn TechnologyList(technology: Vec<TechnologySummaryDto>) -> Element {
    rsx! {
        ListPage {
            kind: CatalogKind::Technology,
            count: technology.len(),
            empty_message: "No technology entries yet.".to_string(),
            for entry in technology {
                Card {
                    key: "{entry.slug}",
                    href: format!("/technology/{}", entry.slug),
                    title: entry.name.clone(),
                    subtitle: or_placeholder(entry.status.as_deref(), DASH),
                    p { class: "text-sm opacity-70",
                        {or_placeholder(entry.origin_species.as_deref(), DASH)}
                    }
                }
            }
        }
    }
}

#[component]
pub fn TechnologyDetail(technology: TechnologyDto) -> Element {
    let description = or_placeholder(technology.description.as_deref(), "No description yet.");

    rsx! {
        Page { title: technology.name.clone(), query: String::new(),
            div { class: "space-y-6",
                div { class: "space-y-1",
                    a { href: "/technology", class: "link text-sm", "← All technology" }
                    h1 { class: "text-3xl font-bold", "{technology.name}" }
                    TagList { tags: technology.tags.clone() }
                }
                Section { title: "Profile".to_string(),
                    dl { class: "space-y-1",
                        Field { label: "Origin".to_string(), value: or_placeholder(technology.origin_species.as_deref(), DASH) }
                        Field { label: "Status".to_string(), value: or_placeholder(technology.status.as_deref(), DASH) }
                    }
                }
                Section { title: "Description".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{description}" }
                }
            }
        }
    }
}

pub async fn technology_list_page(State(state): State<AppState>) -> Response {
    let mut technology = state.api.list_technology().await;
    technology.sort_by(compare_technology);

    render_page(StatusCode::OK, rsx! { TechnologyList { technology } })
}

pub async fn technology_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.api.get_technology(&slug).await {
        Some(technology) => render_page(StatusCode::OK, rsx! { TechnologyDetail { technology } }),
        None => not_found(),
    }
}
