use dioxus::prelude::*;

use crate::{
    client::components::{EmptyState, KindIcon, Page},
    model::catalog::CatalogKind,
};

/// Layout shared by the seven list pages
#[component]
pub fn ListPage(kind: CatalogKind, count: usize, empty_message: String, children: Element) -> Element {
    let plural = kind.plural();

    rsx! {
        Page { title: plural.to_string(), query: String::new(),
            div { class: "space-y-6",
                div {
                    h1 { class: "text-3xl font-bold flex items-center gap-2",
                        KindIcon { kind }
                        "{plural}"
                    }
                    p { class: "opacity-80", "{count} total" }
                }
                if count == 0 {
                    EmptyState { message: empty_message }
                } else {
                    div { class: "grid gap-4 sm:grid-cols-2",
                        {children}
                    }
                }
            }
        }
    }
}
