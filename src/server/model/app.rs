use sea_orm::DatabaseConnection;

use crate::client::api::ApiClient;

/// State shared by the API handlers and the page handlers.
///
/// API handlers only touch `db`; page handlers only touch `api`, reaching the API
/// surface over HTTP like any other client would.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub api: ApiClient,
}

impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, api_base_url): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            api: ApiClient::new(api_base_url),
        }
    }
}
