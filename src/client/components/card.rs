use dioxus::prelude::*;

use crate::model::catalog::EntityRefDto;

/// Placeholder for absent short fields
pub const DASH: &str = "—";

/// Render an optional value, falling back to `placeholder`
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Join the present values with `separator`, skipping absent and blank ones
pub fn join_present(values: &[Option<&str>], separator: &str) -> String {
    values
        .iter()
        .flatten()
        .filter(|value| !value.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Name of a related entry, or a dash when there is none
pub fn ref_name(reference: Option<&EntityRefDto>) -> String {
    or_placeholder(reference.map(|r| r.name.as_str()), DASH)
}

/// Link to a related entry, or a dash when there is none
pub fn ref_link(base: &str, reference: Option<&EntityRefDto>) -> Element {
    match reference {
        Some(reference) => rsx! {
            a { href: "/{base}/{reference.slug}", class: "link link-primary", "{reference.name}" }
        },
        None => rsx! { span { "{DASH}" } },
    }
}

/// Clickable list entry
#[component]
pub fn Card(href: String, title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        a { href: "{href}",
            class: "card bg-base-200 border border-base-300 hover:border-primary transition",
            div { class: "card-body p-4 gap-1",
                h2 { class: "card-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "opacity-80", "{subtitle}" }
                }
                {children}
            }
        }
    }
}

/// Titled block on a detail page
#[component]
pub fn Section(title: String, children: Element) -> Element {
    rsx! {
        section { class: "rounded-box bg-base-200 border border-base-300 p-6 space-y-3",
            h2 { class: "text-xl font-bold", "{title}" }
            {children}
        }
    }
}

/// Label and value pair; absent values render [`DASH`]
#[component]
pub fn Field(label: String, value: String) -> Element {
    rsx! {
        div { class: "flex gap-2",
            dt { class: "font-semibold opacity-70", "{label}:" }
            dd { "{value}" }
        }
    }
}

/// Message shown when a list has nothing to display
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "rounded-box border border-base-300 p-6 text-center opacity-80",
            "{message}"
        }
    }
}
