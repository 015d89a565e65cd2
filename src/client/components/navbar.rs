use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::{client::components::KindIcon, model::catalog::CatalogKind};

#[component]
pub fn Navbar(query: String) -> Element {
    let links = CatalogKind::ALL.map(|kind| (kind, kind.path(), kind.plural()));

    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-50 gap-4 px-4",
            div {
                class: "navbar-start gap-4",
                a { href: "/", class: "text-xl font-bold whitespace-nowrap",
                    "Starwoven Datacore"
                }
                form {
                    action: "/search",
                    method: "get",
                    class: "hidden sm:flex items-center gap-2",
                    input {
                        r#type: "search",
                        name: "q",
                        value: "{query}",
                        placeholder: "Search the Datacore...",
                        class: "input input-sm input-bordered w-64",
                    }
                    button { r#type: "submit", class: "btn btn-sm btn-ghost", "aria-label": "Search",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "menu menu-horizontal menu-sm flex-nowrap",
                    for (kind, path, plural) in links {
                        li { key: "{path}",
                            a { href: "/{path}", class: "flex items-center gap-1",
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
