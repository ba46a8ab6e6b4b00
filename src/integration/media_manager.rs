//! Sonarr and Radarr adapter.
//!
//! Both services expose the same v3 resource API, differing only in the resource
//! name (`series` vs `movie`) and the defaults used when unmonitoring. The
//! difference is captured by a [`ManagerKind`] marker type.

use std::{marker::PhantomData, time::Duration};

use entity::sea_orm_active_enums::MediaType;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::ServiceConfig,
    error::integration::IntegrationError,
    integration::{
        http::{self, API_KEY_HEADER},
        Service,
    },
};

/// Quality profile used when neither the item nor any sibling carries one.
pub const DEFAULT_QUALITY_PROFILE_ID: i32 = 1;

/// Static description of one media manager flavour.
pub trait ManagerKind: Send + Sync + 'static {
    const SERVICE: Service;
    /// Local media type of the records this manager owns.
    const MEDIA_TYPE: MediaType;
    /// v3 API resource name.
    const RESOURCE: &'static str;
    /// Root folder used when neither the item nor any sibling carries one.
    const DEFAULT_ROOT_FOLDER: &'static str;
}

/// Sonarr: series.
#[derive(Debug, Clone, Copy)]
pub struct Series;

/// Radarr: movies.
#[derive(Debug, Clone, Copy)]
pub struct Movies;

impl ManagerKind for Series {
    const SERVICE: Service = Service::Sonarr;
    const MEDIA_TYPE: MediaType = MediaType::Series;
    const RESOURCE: &'static str = "series";
    const DEFAULT_ROOT_FOLDER: &'static str = "/tv";
}

impl ManagerKind for Movies {
    const SERVICE: Service = Service::Radarr;
    const MEDIA_TYPE: MediaType = MediaType::Movie;
    const RESOURCE: &'static str = "movie";
    const DEFAULT_ROOT_FOLDER: &'static str = "/movies";
}

pub type SonarrClient = MediaManagerClient<Series>;
pub type RadarrClient = MediaManagerClient<Movies>;

/// A series or movie as returned by the media manager.
///
/// Fields removarr does not use are kept in `extra` so that an update sends the
/// full object back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedMedia {
    pub id: i32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvdb_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<i32>,
    #[serde(default)]
    pub monitored: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_profile_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<MediaStatistics>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaStatistics {
    #[serde(default)]
    pub size_on_disk: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ManagedMedia {
    /// Size on disk, zero when the manager reports no statistics.
    pub fn size_on_disk(&self) -> i64 {
        self.statistics
            .as_ref()
            .map(|s| s.size_on_disk)
            .unwrap_or(0)
    }

    /// Fills quality profile and root folder if the manager left them out.
    ///
    /// Values are taken from the first sibling that has them, then from the
    /// defaults for this kind of manager.
    pub fn fill_required_fields<K: ManagerKind>(&mut self, siblings: &[ManagedMedia]) {
        if !matches!(self.quality_profile_id, Some(id) if id > 0) {
            self.quality_profile_id = Some(
                siblings
                    .iter()
                    .filter_map(|s| s.quality_profile_id)
                    .find(|id| *id > 0)
                    .unwrap_or(DEFAULT_QUALITY_PROFILE_ID),
            );
        }

        if self
            .root_folder_path
            .as_deref()
            .map_or(true, |p| p.is_empty())
        {
            self.root_folder_path = Some(
                siblings
                    .iter()
                    .filter_map(|s| s.root_folder_path.as_deref())
                    .find(|p| !p.is_empty())
                    .unwrap_or(K::DEFAULT_ROOT_FOLDER)
                    .to_string(),
            );
        }
    }

    fn missing_required_fields(&self) -> bool {
        !matches!(self.quality_profile_id, Some(id) if id > 0)
            || self
                .root_folder_path
                .as_deref()
                .map_or(true, |p| p.is_empty())
    }
}

#[derive(Debug)]
pub struct MediaManagerClient<K: ManagerKind> {
    http: Client,
    base_url: String,
    api_key: String,
    kind: PhantomData<K>,
}

impl<K: ManagerKind> MediaManagerClient<K> {
    pub fn new(config: &ServiceConfig, timeout: Duration) -> Result<Self, IntegrationError> {
        Ok(Self {
            http: http::build_client(K::SERVICE, timeout)?,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
            kind: PhantomData,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/v3/{}", self.base_url, K::RESOURCE)
    }

    fn item_url(&self, id: i32) -> String {
        format!("{}/api/v3/{}/{}", self.base_url, K::RESOURCE, id)
    }

    /// Fetches every series or movie the manager knows about.
    pub async fn list_all(&self) -> Result<Vec<ManagedMedia>, IntegrationError> {
        let request = self
            .http
            .get(self.collection_url())
            .header(API_KEY_HEADER, &self.api_key);
        let response = http::send(K::SERVICE, "list", request).await?;

        http::json(K::SERVICE, "list", response).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ManagedMedia, IntegrationError> {
        let request = self
            .http
            .get(self.item_url(id))
            .header(API_KEY_HEADER, &self.api_key);
        let response = http::send(K::SERVICE, "get", request).await?;

        http::json(K::SERVICE, "get", response).await
    }

    /// Removes the item from the manager.
    ///
    /// # Arguments
    /// - `id` - Manager-assigned ID
    /// - `delete_files` - Ask the manager to remove files from disk as well
    /// - `add_exclusion` - Add the item to the manager's import exclusion list
    pub async fn delete_by_id(
        &self,
        id: i32,
        delete_files: bool,
        add_exclusion: bool,
    ) -> Result<(), IntegrationError> {
        let request = self
            .http
            .delete(self.item_url(id))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("deleteFiles", delete_files.to_string()),
                ("addImportExclusion", add_exclusion.to_string()),
            ]);
        http::send(K::SERVICE, "delete", request).await?;

        Ok(())
    }

    /// Marks the item unmonitored by sending the full object back.
    ///
    /// The manager rejects updates without a quality profile or root folder, so
    /// missing values are filled from a sibling record before the PUT.
    pub async fn unmonitor(&self, id: i32) -> Result<(), IntegrationError> {
        let mut media = self.get_by_id(id).await?;
        media.monitored = false;

        if media.missing_required_fields() {
            let siblings = self.list_all().await?;
            media.fill_required_fields::<K>(&siblings);
        }

        let request = self
            .http
            .put(self.item_url(id))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&media);
        http::send(K::SERVICE, "unmonitor", request).await?;

        Ok(())
    }
}
