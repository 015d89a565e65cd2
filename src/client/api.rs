//! HTTP client the server-rendered pages use to reach the catalog API.
//!
//! Pages never see transport errors: a failed list fetch renders as an empty list and a
//! failed detail fetch renders as the not found page. Failures are logged at `warn`.

use dioxus_logger::tracing;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::model::{
    api::ErrorDto,
    catalog::CatalogKind,
    character::{CharacterDto, CharacterSummaryDto},
    episode::{EpisodeDto, EpisodeSummaryDto},
    faction::{FactionDto, FactionSummaryDto},
    location::{LocationDto, LocationSummaryDto},
    lore::{LoreDto, LoreSummaryDto},
    ship::{ShipDto, ShipSummaryDto},
    technology::{TechnologyDto, TechnologySummaryDto},
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the API served at `base_url`
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for `segments` below the base URL, percent-encoding each segment
    ///
    /// A slug containing `/`, `?` or `#` stays a single path segment instead of changing
    /// the route or turning into a query string.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid API base URL {}: {}", self.base_url, e))?;

        url.path_segments_mut()
            .map_err(|_| format!("API base URL {} cannot have a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Send a GET request to `segments`, treating 404 as absence
    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>, String> {
        let url = self.endpoint(segments)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| format!("Failed to send request to {}: {}", url, e))?;

        let status = response.status();
        match status.as_u16() {
            200 => {
                let body = response
                    .json::<T>()
                    .await
                    .map_err(|e| format!("Failed to parse response from {}: {}", url, e))?;
                Ok(Some(body))
            }
            404 => Ok(None),
            _ => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = serde_json::from_str::<ErrorDto>(&error_text)
                    .map(|dto| dto.error)
                    .unwrap_or(error_text);

                Err(format!(
                    "Request to {} failed with status {}: {}",
                    url, status, message
                ))
            }
        }
    }

    async fn list<T: DeserializeOwned>(&self, kind: CatalogKind) -> Vec<T> {
        match self.get::<Vec<T>>(&["api", kind.path()]).await {
            Ok(Some(items)) => items,
            Ok(None) => {
                tracing::warn!("{} list endpoint not found", kind.label());
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Vec::new()
            }
        }
    }

    async fn detail<T: DeserializeOwned>(&self, kind: CatalogKind, slug: &str) -> Option<T> {
        match self.get::<T>(&["api", kind.path(), "slug", slug]).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    pub async fn list_characters(&self) -> Vec<CharacterSummaryDto> {
        self.list(CatalogKind::Character).await
    }

    pub async fn get_character(&self, slug: &str) -> Option<CharacterDto> {
        self.detail(CatalogKind::Character, slug).await
    }

    pub async fn list_ships(&self) -> Vec<ShipSummaryDto> {
        self.list(CatalogKind::Ship).await
    }

    pub async fn get_ship(&self, slug: &str) -> Option<ShipDto> {
        self.detail(CatalogKind::Ship, slug).await
    }

    pub async fn list_factions(&self) -> Vec<FactionSummaryDto> {
        self.list(CatalogKind::Faction).await
    }

    pub async fn get_faction(&self, slug: &str) -> Option<FactionDto> {
        self.detail(CatalogKind::Faction, slug).await
    }

    pub async fn list_episodes(&self) -> Vec<EpisodeSummaryDto> {
        self.list(CatalogKind::Episode).await
    }

    pub async fn get_episode(&self, slug: &str) -> Option<EpisodeDto> {
        self.detail(CatalogKind::Episode, slug).await
    }

    pub async fn list_locations(&self) -> Vec<LocationSummaryDto> {
        self.list(CatalogKind::Location).await
    }

    pub async fn get_location(&self, slug: &str) -> Option<LocationDto> {
        self.detail(CatalogKind::Location, slug).await
    }

    pub async fn list_technology(&self) -> Vec<TechnologySummaryDto> {
        self.list(CatalogKind::Technology).await
    }

    pub async fn get_technology(&self, slug: &str) -> Option<TechnologyDto> {
        self.detail(CatalogKind::Technology, slug).await
    }

    pub async fn list_lore(&self) -> Vec<LoreSummaryDto> {
        self.list(CatalogKind::Lore).await
    }

    pub async fn get_lore(&self, slug: &str) -> Option<LoreDto> {
        self.detail(CatalogKind::Lore, slug).await
    }
}
