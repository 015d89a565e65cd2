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
        episode::{EpisodeDto, EpisodeSummaryDto},
    },
    server::model::app::AppState,
};

/// Season, then episode number
pub fn compare_episodes(a: &EpisodeSummaryDto, b: &EpisodeSummaryDto) -> Ordering {
    a.season
        .cmp(&b.season)
        .then_with(|| a.episode.cmp(&b.episode))
}

/// `S01E03` style code
pub fn episode_code(season: i32, episode: i32) -> String {
    format!("S{:02}E{:02}", season, episode)
}

#[component]
pub fn EpisodeList(episodes: Vec<EpisodeSummaryDto>) -> Element {
    rsx! {
        ListPage {
            kind: CatalogKind::Episode,
            count: episodes.len(),
            empty_message: "No episodes yet.".to_string(),
            for episode in episodes {
                Card {
                    key: "{episode.slug}",
                    href: format!("/episodes/{}", episode.slug),
                    title: episode.title.clone(),
                    subtitle: episode_code(episode.season, episode.episode),
                    p { class: "text-sm opacity-70",
                        {or_placeholder(episode.discovery.as_deref(), DASH)}
                    }
                }
            }
        }
    }
}

#[component]
pub fn EpisodeDetail(episode: EpisodeDto) -> Element {
    let code = episode_code(episode.season, episode.episode);
    let discovery = or_placeholder(episode.discovery.as_deref(), DASH);
    let synopsis = or_placeholder(episode.synopsis.as_deref(), "No synopsis yet.");

    rsx! {
        Page { title: episode.title.clone(), query: String::new(),
            div { class: "space-y-6",
                div { class: "space-y-1",
                    a { href: "/episodes", class: "link text-sm", "← All episodes" }
                    h1 { class: "text-3xl font-bold", "{episode.title}" }
                    p { class: "opacity-80", "{code}" }
                    p { class: "text-sm opacity-70", "{discovery}" }
                    TagList { tags: episode.tags.clone() }
                }
                Section { title: "Synopsis".to_string(),
                    p { class: "leading-relaxed whitespace-pre-line", "{synopsis}" }
                }
                Section { title: "Main cast".to_string(),
                    if episode.main_cast.is_empty() {
                        p { class: "opacity-80", "No cast listed yet." }
                    } else {
                        ul { class: "list-disc pl-6",
                            for character in episode.main_cast.clone() {
                                li { key: "{character.slug}",
                                    a { href: "/characters/{character.slug}", class: "link", "{character.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub async fn episodes_page(State(state): State<AppState>) -> Response {
    let mut episodes = state.api.list_episodes().await;
    episodes.sort_by(compare_episodes);

    render_page(StatusCode::OK, rsx! { EpisodeList { episodes } })
}

pub async fn episode_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.api.get_episode(&slug).await {
        Some(episode) => render_page(StatusCode::OK, rsx! { EpisodeDetail { episode } }),
        None => not_found(),
    }
}
