use dioxus::prelude::*;

use crate::client::components::{Footer, Navbar};

const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISYUI_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

/// Full HTML document shared by every page
///
/// `query` prefills the navbar search box.
#[component]
pub fn Page(title: String, query: String, children: Element) -> Element {
    rsx! {
        html { lang: "en", "data-theme": "dark",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{title} | Starwoven Datacore" }
                link { rel: "stylesheet", href: DAISYUI_CDN }
                script { src: TAILWIND_CDN }
            }
            body { class: "min-h-screen flex flex-col",
                Navbar { query }
                main { class: "flex-1 pt-[80px] p-4 w-full max-w-5xl mx-auto",
                    {children}
                }
                Footer {}
            }
        }
    }
}
