use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{api::ErrorDto, catalog::CatalogKind};

#[derive(Error, Debug)]
pub enum CatalogError {
    /// No row of the given kind matches the requested slug or identifier.
    #[error("{} not found", .0.label())]
    NotFound(CatalogKind),
    /// The path identifier could not be parsed as a numeric id.
    #[error("Invalid {} id", .0.noun())]
    InvalidId(CatalogKind),
    /// A create request omitted fields that must be present.
    #[error("{0} are required")]
    MissingFields(&'static str),
    /// The request body is not JSON or does not match the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl CatalogError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidId(_) | Self::MissingFields(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
