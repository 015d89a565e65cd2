use dioxus::prelude::*;

use crate::model::catalog::TagDto;

#[component]
pub fn TagList(tags: Vec<TagDto>) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "flex flex-wrap gap-2",
            for tag in tags {
                li { key: "{tag.id}", class: "badge badge-outline", "{tag.name}" }
            }
        }
    }
}
