//! Server-side rendering of page components into HTTP responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::client::routes::NotFound;

/// Render a page element into a complete HTML document
pub fn render_document(page: Element) -> String {
    format!("<!DOCTYPE html>{}", dioxus_ssr::render_element(page))
}

/// Render a page element with the given status code
pub fn render_page(status: StatusCode, page: Element) -> Response {
    (status, Html(render_document(page))).into_response()
}

/// The not found page served with HTTP 404
pub fn not_found() -> Response {
    render_page(StatusCode::NOT_FOUND, rsx! { NotFound {} })
}
