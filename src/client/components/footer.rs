use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer footer-center bg-base-200 p-4 text-sm",
            p { "Starwoven Datacore, the living archive of the Starwoven universe." }
            p {
                a { href: "/api/docs", class: "link", "API documentation" }
            }
        }
    }
}
