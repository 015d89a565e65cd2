//! Server-rendered wiki pages.
//!
//! Pages are Dioxus components rendered to HTML with `dioxus-ssr`. They fetch their data
//! from the JSON API through [`api::ApiClient`], never from the database directly.

pub mod api;
pub mod components;
pub mod render;
pub mod router;
pub mod routes;
pub mod search;
