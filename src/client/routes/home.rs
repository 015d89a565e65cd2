use axum::{http::StatusCode, response::Response};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{KindIcon, Page},
        render::render_page,
    },
    model::catalog::CatalogKind,
};

#[component]
pub fn Home() -> Element {
    let links = CatalogKind::ALL.map(|kind| (kind, kind.path(), kind.plural()));

    rsx! {
        Page { title: "Home".to_string(), query: String::new(),
            div { class: "flex flex-col items-center gap-6 py-10 text-center",
                h1 { class: "text-4xl font-bold tracking-wide", "Starwoven Datacore" }
                p { class: "max-w-xl opacity-80",
                    "The living archive of the Starwoven universe: its crew, ships, factions, worlds, technology and lore."
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    for (kind, path, plural) in links {
                        li { key: "{path}",
                            a { href: "/{path}", class: "btn btn-outline w-40 flex gap-2",
                                KindIcon { kind }
                                "{plural}"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub async fn home_page() -> Response {
    render_page(StatusCode::OK, rsx! { Home {} })
}
