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
            card::{join_present, or_placeholder, DASH},
            Card, Field, ListPage, Page, Section, TagList,
        },
        render::{not_found, render_page},
    },
    model::{
        catalog::CatalogKind,
        location::{LocationDto, LocationSummaryDto},
    },
    server::model::app::AppState,
};

pub fn compare_locations(a: &LocationSummaryDto, b: &LocationSummaryDto) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

#[component]
pub fn LocationList(locations: Vec<LocationSummaryDto>) -> Element {
    rsx! {
        ListPage {
            kind: CatalogKind::Location,
            count: locations.len(),
            empty_message: "No locations yet.".to_string(),
            for location in locations {
                Card {
                    key: "{location.slug}",
                    href: format!("/locations/{}", location.slug),
                    title: location.name.clone(),
                    subtitle: or_placeholder(location.region.as_deref(), DASH),
                    p { class: "text-sm opacity-70",
                        {or_placeholder(
                            Some(&join_present(
                                &[location.dominant_species.as_deref(), location.primary_language.as_deref()],
                                " • ",
                            )),
                            DASH,
                        )}
                    }
                }
            }
        }
    }
}

#[component]
pub fn LocationDetail(location: LocationDto) -> Element {
    let overview = or_placeholder(location.overview.as_deref(), "No overview yet.");
    let description = or_placeholder(location.description.as_deref(), "No description yet.");

    rsx! {
        Page { title: location.name.clone(), query: String::new(),
            div { class: "space-y-6",
                div { class: "space-y-1",
                    a { href: "/locations", class: "link text-sm", "← All locations" }
                    h1 { class: "text-3xl font-bold", "{location.name}" }
                    TagList { tags: location.tags.clone() }
                }
                Section { title: "Survey".to_string(),
                    dl { class: "space-y-1",
                        Field { label: "Region".to_string(), value: or_placeholder(location.region.as_deref(), DASH) }
                        Field { label: "Dominant species".to_string(), value: or_placeholder(location.dominant_species.as_deref(), DASH) }
                        Field { label: "Primary language".to_string(), value: or_placeholder(location.primary_language.as_deref(), DASH) }
                    }
                }
                Section { title: "Overview".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{overview}" }
                }
                Section { title: "Description".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{description}" }
                }
            }
        }
    }
}

pub async fn locations_page(State(state): State<AppState>) -> Response {
    let mut locations = state.api.list_locations().await;
    locations.sort_by(compare_locations);

    render_page(StatusCode::OK, rsx! { LocationList { locations } })
}

pub async fn location_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.api.get_location(&slug).await {
        Some(location) => render_page(StatusCode::OK, rsx! { LocationDetail { location } }),
        None => not_found(),
    }
}
