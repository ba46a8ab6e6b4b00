//! Teardown of a media item across every system that holds a piece of it.
//!
//! Steps run in a fixed order and each one is independent: a failure is
//! recorded and the next step still runs. The audit entry and the local delete
//! always happen, and there is no rollback.

use std::{io::ErrorKind, path::Path};

use sea_orm::DatabaseConnection;
use tokio::fs;

use crate::{
    data::{
        audit_log::AuditLogRepository, media_item::MediaItemRepository,
        torrent::TorrentRepository,
    },
    error::{deletion::DeletionStepError, Error},
    integration::{
        media_manager::{ManagerKind, MediaManagerClient},
        Integrations, Service,
    },
    model::{
        db::MediaItemModel,
        deletion::{BulkDeletionReport, ItemFailure},
    },
    util::gate::StoreGate,
};

pub struct DeletionService<'a> {
    db: &'a DatabaseConnection,
    integrations: &'a Integrations,
    gate: &'a StoreGate,
}

impl<'a> DeletionService<'a> {
    /// Creates a new instance of [`DeletionService`]
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

    /// Deletes a media item everywhere, best effort.
    ///
    /// Order: files on disk, Sonarr/Radarr (delete, falling back to unmonitor),
    /// the Overseerr request, linked torrents in qBittorrent, the audit entry,
    /// then the local row. No sync pass runs while a deletion is in progress.
    ///
    /// # Arguments
    /// - `media_item_id` - Local media item ID
    /// - `user_id` - Acting user recorded in the audit log
    ///
    /// # Returns
    /// - `Ok(())` - Every step succeeded
    /// - `Err(Error::DeletionIncomplete)` - The item is gone locally but some downstream steps failed
    /// - `Err(Error::MediaItemNotFound)` - Nothing to delete
    /// - `Err(Error::DbErr)` - Loading or deleting the local row failed
    pub async fn delete_media_item(&self, media_item_id: i32, user_id: i32) -> Result<(), Error> {
        let _guard = self.gate.delete().await;

        let media_item_repo = MediaItemRepository::new(self.db);
        let Some(item) = media_item_repo.find_by_id(media_item_id).await? else {
            return Err(Error::MediaItemNotFound(media_item_id));
        };

        tracing::info!("Deleting media item {} ('{}')", item.id, item.title);

        let mut failures = Vec::new();

        if let Some(path) = item.file_path.as_deref().filter(|p| !p.is_empty()) {
            if let Err(source) = remove_path(Path::new(path)).await {
                failures.push(DeletionStepError::Filesystem {
                    path: path.to_string(),
                    source,
                });
            }
        }

        if let Err(e) = self.remove_from_manager(&item).await {
            failures.push(e);
        }

        if let Err(e) = self.remove_request(&item).await {
            failures.push(e);
        }

        failures.extend(self.remove_torrents(&item).await);

        for failure in &failures {
            tracing::error!("Deletion of '{}': {}", item.title, failure);
        }

        let audit_repo = AuditLogRepository::new(self.db);
        if let Err(e) = audit_repo
            .record_deletion(
                user_id,
                item.id,
                &item.title,
                item.media_type,
                audit_details(&item, &failures),
            )
            .await
        {
            tracing::error!("Failed to write audit entry for '{}': {}", item.title, e);
        }

        media_item_repo.delete_by_id(item.id).await?;

        if failures.is_empty() {
            tracing::info!("Deleted media item {} ('{}')", item.id, item.title);
            return Ok(());
        }

        Err(Error::DeletionIncomplete {
            media_item_id: item.id,
            title: item.title,
            failures,
        })
    }

    /// Deletes several media items one after another.
    ///
    /// Each item goes through [`delete_media_item`](Self::delete_media_item) on
    /// its own; a failure is recorded and the next item still runs.
    pub async fn delete_many(&self, media_item_ids: &[i32], user_id: i32) -> BulkDeletionReport {
        let mut report = BulkDeletionReport {
            total: media_item_ids.len(),
            ..Default::default()
        };

        for &media_item_id in media_item_ids {
            match self.delete_media_item(media_item_id, user_id).await {
                Ok(()) => report.deleted += 1,
                Err(e) => {
                    tracing::error!("Failed to delete media item {} in bulk: {}", media_item_id, e);
                    report.failures.push(ItemFailure {
                        media_item_id,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Bulk deletion finished: {} of {} deleted",
            report.deleted,
            report.total
        );

        report
    }

    async fn remove_from_manager(&self, item: &MediaItemModel) -> Result<(), DeletionStepError> {
        if let (Some(id), Some(client)) = (item.sonarr_id, self.integrations.sonarr.enabled()) {
            return remove_from(client, id).await;
        }
        if let (Some(id), Some(client)) = (item.radarr_id, self.integrations.radarr.enabled()) {
            return remove_from(client, id).await;
        }

        Ok(())
    }

    async fn remove_request(&self, item: &MediaItemModel) -> Result<(), DeletionStepError> {
        let Some(client) = self.integrations.overseerr.enabled() else {
            return Ok(());
        };

        let request_id = match item.overseerr_request_id {
            Some(id) => id,
            None => match client
                .find_by_media(item.media_type, item.tmdb_id, item.tvdb_id)
                .await
            {
                Ok(Some(request)) => request.id,
                Ok(None) => return Ok(()),
                Err(e) => {
                    tracing::warn!("Could not look up request for '{}': {}", item.title, e);
                    return Ok(());
                }
            },
        };

        client
            .delete_by_id(request_id)
            .await
            .map_err(|source| DeletionStepError::Request {
                service: Service::Overseerr,
                request_id,
                source,
            })
    }

    async fn remove_torrents(&self, item: &MediaItemModel) -> Vec<DeletionStepError> {
        let Some(client) = self.integrations.qbittorrent.enabled() else {
            return Vec::new();
        };

        let torrents = match TorrentRepository::new(self.db)
            .find_by_media_item(item.id)
            .await
        {
            Ok(torrents) => torrents,
            Err(e) => return vec![DeletionStepError::TorrentLookup(e)],
        };

        let mut failures = Vec::new();
        for torrent in torrents {
            if let Err(source) = client.delete_by_hash(&torrent.hash, true).await {
                failures.push(DeletionStepError::Torrent {
                    hash: torrent.hash,
                    source,
                });
            }
        }

        failures
    }
}

/// Hard delete without an import exclusion, unmonitoring if the manager refuses.
async fn remove_from<K: ManagerKind>(
    client: &MediaManagerClient<K>,
    id: i32,
) -> Result<(), DeletionStepError> {
    let delete = match client.delete_by_id(id, false, false).await {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    tracing::warn!("Delete from {} failed, unmonitoring instead: {}", K::SERVICE, delete);

    client
        .unmonitor(id)
        .await
        .map_err(|unmonitor| DeletionStepError::MediaManager {
            service: K::SERVICE,
            delete,
            unmonitor,
        })
}

/// Removes a file or directory tree; a missing path counts as removed.
///
/// After removing a single file its parent directory is removed too, but only
/// if it is now empty.
async fn remove_path(path: &Path) -> Result<(), std::io::Error> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        return fs::remove_dir_all(path).await;
    }

    fs::remove_file(path).await?;

    if let Some(parent) = path.parent() {
        if let Err(e) = remove_dir_if_empty(parent).await {
            tracing::debug!("Left parent directory {}: {}", parent.display(), e);
        }
    }

    Ok(())
}

async fn remove_dir_if_empty(dir: &Path) -> Result<(), std::io::Error> {
    let mut entries = fs::read_dir(dir).await?;
    if entries.next_entry().await?.is_none() {
        fs::remove_dir(dir).await?;
    }

    Ok(())
}

fn audit_details(item: &MediaItemModel, failures: &[DeletionStepError]) -> String {
    let mut details = format!(
        "Deleted media: {} (type: {})",
        item.title,
        item.media_type.as_str()
    );

    if !failures.is_empty() {
        let errors = failures
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        details.push_str(&format!(" - Errors: [{}]", errors));
    }

    details
}
