//! Overseerr request manager adapter.

use std::time::Duration;

use entity::sea_orm_active_enums::MediaType;
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

const SERVICE: Service = Service::Overseerr;

/// Page size requested when listing requests; Overseerr defaults to 10.
const REQUEST_PAGE_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRequest {
    pub id: i32,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub requested_by: Option<RequestUser>,
    #[serde(default)]
    pub media: Option<RequestMedia>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestUser {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMedia {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub tmdb_id: Option<i32>,
    #[serde(default)]
    pub tvdb_id: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestPage {
    #[serde(default)]
    page_info: Option<PageInfo>,
    #[serde(default)]
    results: Vec<MediaRequest>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct PageInfo {
    pages: usize,
}

/// Whether another page follows the `fetched`-th one.
///
/// `pageInfo.pages` decides when present; otherwise a short page is the last.
fn has_next_page(page_info: Option<PageInfo>, fetched: usize, page_len: usize) -> bool {
    if page_len == 0 {
        return false;
    }

    match page_info {
        Some(info) => fetched < info.pages,
        None => page_len >= REQUEST_PAGE_SIZE,
    }
}

impl MediaRequest {
    /// Raw media type token, falling back to the nested media object.
    fn raw_media_type(&self) -> Option<&str> {
        self.media_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| {
                self.media
                    .as_ref()
                    .and_then(|m| m.media_type.as_deref())
                    .filter(|t| !t.is_empty())
            })
    }

    /// Effective local media type; Overseerr's `tv` maps to series.
    pub fn effective_media_type(&self) -> Option<MediaType> {
        self.raw_media_type().and_then(parse_media_type)
    }

    pub fn tmdb_id(&self) -> Option<i32> {
        self.media.as_ref().and_then(|m| m.tmdb_id).filter(|id| *id > 0)
    }

    pub fn tvdb_id(&self) -> Option<i32> {
        self.media.as_ref().and_then(|m| m.tvdb_id).filter(|id| *id > 0)
    }

    pub fn requested_by_id(&self) -> Option<i32> {
        self.requested_by.as_ref().map(|u| u.id)
    }

    /// Whether this request is for the given local media.
    ///
    /// A request with no media type at all matches on ID alone. Movies match on
    /// TMDB ID, series on TVDB ID.
    pub fn matches(&self, media_type: MediaType, tmdb_id: Option<i32>, tvdb_id: Option<i32>) -> bool {
        let type_matches = match self.raw_media_type() {
            None => true,
            Some(raw) => parse_media_type(raw) == Some(media_type),
        };
        if !type_matches {
            return false;
        }

        match media_type {
            MediaType::Movie => tmdb_id.is_some() && self.tmdb_id() == tmdb_id,
            MediaType::Series => tvdb_id.is_some() && self.tvdb_id() == tvdb_id,
        }
    }
}

fn parse_media_type(raw: &str) -> Option<MediaType> {
    match raw {
        "movie" => Some(MediaType::Movie),
        "tv" | "series" => Some(MediaType::Series),
        _ => None,
    }
}

#[derive(Debug)]
pub struct OverseerrClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OverseerrClient {
    pub fn new(config: &ServiceConfig, timeout: Duration) -> Result<Self, IntegrationError> {
        Ok(Self {
            http: http::build_client(SERVICE, timeout)?,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Every request, fetched page by page.
    pub async fn list_all(&self) -> Result<Vec<MediaRequest>, IntegrationError> {
        let mut requests = Vec::new();
        let mut fetched = 0;

        loop {
            let skip = fetched * REQUEST_PAGE_SIZE;
            let request = self
                .http
                .get(format!("{}/api/v1/request", self.base_url))
                .header(API_KEY_HEADER, &self.api_key)
                .query(&[
                    ("take", REQUEST_PAGE_SIZE.to_string()),
                    ("skip", skip.to_string()),
                ]);
            let response = http::send(SERVICE, "list requests", request).await?;
            let page: RequestPage = http::json(SERVICE, "list requests", response).await?;
            fetched += 1;

            let page_len = page.results.len();
            requests.extend(page.results);

            if !has_next_page(page.page_info, fetched, page_len) {
                break;
            }
        }

        tracing::debug!("Fetched {} request(s) over {} page(s)", requests.len(), fetched);

        Ok(requests)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), IntegrationError> {
        let request = self
            .http
            .delete(format!("{}/api/v1/request/{}", self.base_url, id))
            .header(API_KEY_HEADER, &self.api_key);
        http::send(SERVICE, "delete request", request).await?;

        Ok(())
    }

    /// Finds the request for a local media item among all current requests.
    ///
    /// # Returns
    /// - `Ok(Some(request))` - First matching request
    /// - `Ok(None)` - No request matches
    /// - `Err(IntegrationError)` - Listing requests failed
    pub async fn find_by_media(
        &self,
        media_type: MediaType,
        tmdb_id: Option<i32>,
        tvdb_id: Option<i32>,
    ) -> Result<Option<MediaRequest>, IntegrationError> {
        let requests = self.list_all().await?;

        Ok(requests
            .into_iter()
            .find(|r| r.matches(media_type, tmdb_id, tvdb_id)))
    }
}
