//! qBittorrent WebUI adapter.
//!
//! The WebUI uses a session cookie. Login happens lazily on the first call and
//! the session is reused; a 401/403 clears it and the call is retried once
//! after logging in again.

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{
    config::QBittorrentConfig,
    error::integration::IntegrationError,
    integration::{http, Service},
};

const SERVICE: Service = Service::QBittorrent;
const SESSION_COOKIE: &str = "SID";

/// Torrent states that count as actively seeding.
pub const SEEDING_STATES: [&str; 2] = ["uploading", "stalledUP"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TorrentInfo {
    pub hash: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub state: String,
    /// Seconds spent seeding.
    #[serde(default)]
    pub seeding_time: i64,
    #[serde(default)]
    pub uploaded: i64,
    #[serde(default)]
    pub downloaded: i64,
    #[serde(default)]
    pub ratio: f64,
    /// Unix timestamp.
    #[serde(default)]
    pub added_on: i64,
    #[serde(default)]
    pub tracker: String,
    #[serde(default)]
    pub content_path: String,
}

impl TorrentInfo {
    pub fn is_seeding(&self) -> bool {
        SEEDING_STATES.contains(&self.state.as_str())
    }
}

#[derive(Debug)]
pub struct QBittorrentClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
    sid: RwLock<Option<String>>,
}

impl QBittorrentClient {
    pub fn new(config: &QBittorrentConfig, timeout: Duration) -> Result<Self, IntegrationError> {
        Ok(Self {
            http: http::build_client(SERVICE, timeout)?,
            base_url: config.url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            sid: RwLock::new(None),
        })
    }

    pub async fn list_all(&self) -> Result<Vec<TorrentInfo>, IntegrationError> {
        let url = format!("{}/api/v2/torrents/info", self.base_url);
        let response = self
            .send_authenticated("list torrents", || self.http.get(&url))
            .await?;

        http::json(SERVICE, "list torrents", response).await
    }

    pub async fn delete_by_hash(&self, hash: &str, delete_files: bool) -> Result<(), IntegrationError> {
        let url = format!("{}/api/v2/torrents/delete", self.base_url);
        let form = [
            ("hashes", hash.to_string()),
            ("deleteFiles", delete_files.to_string()),
        ];
        self.send_authenticated("delete torrent", || self.http.post(&url).form(&form))
            .await?;

        Ok(())
    }

    async fn login(&self) -> Result<String, IntegrationError> {
        let request = self
            .http
            .post(format!("{}/api/v2/auth/login", self.base_url))
            .form(&[
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
            ]);
        let response = http::send(SERVICE, "login", request).await?;

        let sid = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(parse_session_cookie);

        match sid {
            Some(sid) => {
                *self.sid.write().await = Some(sid.clone());
                Ok(sid)
            }
            None => {
                let body = response.text().await.unwrap_or_default();
                Err(IntegrationError::Login {
                    service: SERVICE,
                    reason: format!("no session cookie in response: {}", body.trim()),
                })
            }
        }
    }

    async fn session(&self) -> Result<String, IntegrationError> {
        if let Some(sid) = self.sid.read().await.clone() {
            return Ok(sid);
        }
        self.login().await
    }

    async fn send_authenticated<F>(
        &self,
        operation: &'static str,
        build: F,
    ) -> Result<reqwest::Response, IntegrationError>
    where
        F: Fn() -> RequestBuilder,
    {
        let sid = self.session().await?;
        let response = build()
            .header(header::COOKIE, format!("{SESSION_COOKIE}={sid}"))
            .send()
            .await
            .map_err(|e| IntegrationError::from_reqwest(SERVICE, operation, e))?;

        if !matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return http::ensure_success(SERVICE, operation, response).await;
        }

        tracing::debug!("qBittorrent session rejected, logging in again");
        *self.sid.write().await = None;
        let sid = self.login().await?;

        let request = build().header(header::COOKIE, format!("{SESSION_COOKIE}={sid}"));
        http::send(SERVICE, operation, request).await
    }
}

/// Extracts the session ID from a `Set-Cookie` header value.
fn parse_session_cookie(value: &str) -> Option<String> {
    let pair = value.split(';').next()?.trim();
    let (name, sid) = pair.split_once('=')?;
    if name == SESSION_COOKIE && !sid.is_empty() {
        Some(sid.to_string())
    } else {
        None
    }
}
