//! Reconciliation of the local store with the external services.
//!
//! Every pass fetches a full snapshot from each source and upserts it keyed by
//! a stable external identifier, so repeated passes are safe.

mod media;
mod request;
mod torrent;

pub mod matching;
pub mod tracker;

use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;

use crate::{
    error::Error,
    integration::{Integrations, Service},
    model::{
        app::AppState,
        sync::{StageFailure, SyncSummary, TorrentSyncSummary},
    },
    util::gate::StoreGate,
};

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    integrations: &'a Integrations,
    gate: &'a StoreGate,
}

impl<'a> SyncService<'a> {
    /// Creates a new instance of [`SyncService`]
    pub fn new(
        db: &'a DatabaseConnection,
        integrations: &'a Integrations,
        gate: &'a StoreGate,
    ) -> Self {
        Self {
            db,
            integrations,
            gate,
        }
    }

    /// Stores every series Sonarr reports.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of series stored
    /// - `Err(Error)` - Sonarr is disabled or listing series failed
    pub async fn sync_series(&self) -> Result<usize, Error> {
        let _guard = self.gate.sync().await;
        self.series().await
    }

    /// Stores every movie Radarr reports.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of movies stored
    /// - `Err(Error)` - Radarr is disabled or listing movies failed
    pub async fn sync_movies(&self) -> Result<usize, Error> {
        let _guard = self.gate.sync().await;
        self.movies().await
    }

    /// Links media items to their Overseerr requests; a no-op when Overseerr is disabled.
    pub async fn sync_requests(&self) -> Result<usize, Error> {
        let _guard = self.gate.sync().await;
        self.requests().await
    }

    /// Runs the Sonarr, Radarr and Overseerr stages in that order.
    ///
    /// A failing stage is logged and recorded in the summary; later stages still
    /// run. Disabled integrations are skipped.
    pub async fn sync_all(&self) -> SyncSummary {
        let _guard = self.gate.sync().await;
        self.all().await
    }

    /// Refreshes torrents from qBittorrent and links them to media items.
    ///
    /// # Returns
    /// - `Ok(TorrentSyncSummary)` - Counts for this pass
    /// - `Err(Error)` - qBittorrent is disabled, or the torrent list or local
    ///   snapshot could not be loaded
    pub async fn sync_torrents(&self) -> Result<TorrentSyncSummary, Error> {
        let _guard = self.gate.sync().await;
        self.torrents().await
    }

    /// Media sync followed by torrent sync, as run by the scheduler.
    pub async fn full_sync(&self) -> SyncSummary {
        let _guard = self.gate.sync().await;

        let mut summary = self.all().await;
        if self.integrations.qbittorrent.is_enabled() {
            match self.torrents().await {
                Ok(torrents) => summary.torrents = Some(torrents),
                Err(e) => {
                    tracing::error!("Torrent sync failed: {}", e);
                    summary.failures.push(StageFailure {
                        service: Service::QBittorrent,
                        message: e.to_string(),
                    });
                }
            }
        }

        summary
    }

    /// Runs [`full_sync`](Self::full_sync) against the current integrations snapshot.
    ///
    /// The snapshot is taken once, so a settings reload during the pass does not
    /// affect it.
    pub async fn run(state: &AppState) -> SyncSummary {
        let integrations = state.integrations.snapshot();
        let summary = SyncService::new(&state.db, &integrations, &state.gate)
            .full_sync()
            .await;

        tracing::info!(
            "Sync complete: {} series, {} movies, {} request link(s), {} failure(s)",
            summary.series,
            summary.movies,
            summary.requests_linked,
            summary.failures.len()
        );

        summary
    }

    /// Runs [`run`](Self::run) as an independent background task.
    pub fn spawn_full_sync(state: AppState) -> JoinHandle<SyncSummary> {
        tokio::spawn(async move { SyncService::run(&state).await })
    }

    async fn series(&self) -> Result<usize, Error> {
        let client = self.integrations.sonarr.require(Service::Sonarr)?;
        media::sync_manager(self.db, client).await
    }

    async fn movies(&self) -> Result<usize, Error> {
        let client = self.integrations.radarr.require(Service::Radarr)?;
        media::sync_manager(self.db, client).await
    }

    async fn requests(&self) -> Result<usize, Error> {
        let Some(client) = self.integrations.overseerr.enabled() else {
            return Ok(0);
        };
        request::sync_requests(self.db, client).await
    }

    async fn torrents(&self) -> Result<TorrentSyncSummary, Error> {
        let client = self.integrations.qbittorrent.require(Service::QBittorrent)?;
        torrent::sync_torrents(self.db, client, &self.integrations.prowlarr).await
    }

    async fn all(&self) -> SyncSummary {
        let mut summary = SyncSummary::default();

        if self.integrations.sonarr.is_enabled() {
            tracing::info!("Syncing series from sonarr");
            match self.series().await {
                Ok(count) => {
                    tracing::info!("Synced {} series", count);
                    summary.series = count;
                }
                Err(e) => record_failure(&mut summary, Service::Sonarr, e),
            }
        }

        if self.integrations.radarr.is_enabled() {
            tracing::info!("Syncing movies from radarr");
            match self.movies().await {
                Ok(count) => {
                    tracing::info!("Synced {} movies", count);
                    summary.movies = count;
                }
                Err(e) => record_failure(&mut summary, Service::Radarr, e),
            }
        }

        if self.integrations.overseerr.is_enabled() {
            tracing::info!("Syncing requests from overseerr");
            match self.requests().await {
                Ok(count) => {
                    tracing::info!("Linked {} request(s)", count);
                    summary.requests_linked = count;
                }
                Err(e) => record_failure(&mut summary, Service::Overseerr, e),
            }
        }

        summary
    }
}

fn record_failure(summary: &mut SyncSummary, service: Service, error: Error) {
    tracing::error!("{} sync failed: {}", service, error);
    summary.failures.push(StageFailure {
        service,
        message: error.to_string(),
    });
}
