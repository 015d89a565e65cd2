use axum::response::Response;
use dioxus::prelude::*;

use crate::client::{components::Page, render};

#[component]
pub fn NotFound() -> Element {
    rsx! {
        Page { title: "Not found".to_string(), query: String::new(),
            div { class: "flex flex-col items-center gap-4 py-10 text-center",
                h1 { class: "text-3xl font-bold", "Not found" }
                p { class: "opacity-80", "This entry is not in the Datacore." }
                a { href: "/", class: "btn btn-primary", "Back to the Datacore" }
            }
        }
    }
}

pub async fn not_found_page() -> Response {
    render::not_found()
}
