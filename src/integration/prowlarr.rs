//! Prowlarr indexer manager adapter.

use std::time::Duration;

use entity::sea_orm_active_enums::TrackerType;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::ServiceConfig,
    error::integration::IntegrationError,
    integration::{
        http::{self, API_KEY_HEADER},
        Service,
    },
};

const SERVICE: Service = Service::Prowlarr;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexer {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub privacy: Option<String>,
    /// Minimum seeding time in seconds.
    #[serde(default)]
    pub min_seed_time: Option<i64>,
    #[serde(default)]
    pub min_ratio: Option<f64>,
}

impl Indexer {
    /// Anything not explicitly public is treated as private.
    pub fn tracker_type(&self) -> TrackerType {
        match self.privacy.as_deref() {
            Some(p) if p.eq_ignore_ascii_case("public") => TrackerType::Public,
            _ => TrackerType::Private,
        }
    }
}

#[derive(Debug)]
pub struct ProwlarrClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ProwlarrClient {
    pub fn new(config: &ServiceConfig, timeout: Duration) -> Result<Self, IntegrationError> {
        Ok(Self {
            http: http::build_client(SERVICE, timeout)?,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub async fn list_all(&self) -> Result<Vec<Indexer>, IntegrationError> {
        let request = self
            .http
            .get(format!("{}/api/v1/indexer", self.base_url))
            .header(API_KEY_HEADER, &self.api_key);
        let response = http::send(SERVICE, "list indexers", request).await?;

        http::json(SERVICE, "list indexers", response).await
    }
}
