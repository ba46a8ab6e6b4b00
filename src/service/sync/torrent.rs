use sea_orm::DatabaseConnection;

use crate::{
    data::{
        media_item::MediaItemRepository,
        seeding_override::SeedingOverrideRepository,
        torrent::{TorrentRepository, TorrentUpsert},
    },
    error::Error,
    integration::{prowlarr::ProwlarrClient, qbittorrent::{QBittorrentClient, TorrentInfo}, Integration},
    model::sync::TorrentSyncSummary,
    service::sync::{
        matching::MediaMatcher,
        tracker::{resolve_tracker, ResolvedTracker},
    },
    util::time,
};

/// Refreshes every torrent from the client and links it to a media item.
///
/// Indexer metadata is optional: if Prowlarr is disabled or unreachable, tracker
/// classification falls back to the public allow-list.
///
/// # Returns
/// - `Ok(TorrentSyncSummary)` - Counts for this pass
/// - `Err(Error)` - Fetching torrents, media items or overrides failed
pub(super) async fn sync_torrents(
    db: &DatabaseConnection,
    client: &QBittorrentClient,
    prowlarr: &Integration<ProwlarrClient>,
) -> Result<TorrentSyncSummary, Error> {
    let torrent_repo = TorrentRepository::new(db);

    let torrents = client.list_all().await?;
    tracing::info!("Fetched {} torrent(s) from qbittorrent", torrents.len());

    let indexers = match prowlarr.enabled() {
        Some(prowlarr) => match prowlarr.list_all().await {
            Ok(indexers) => indexers,
            Err(e) => {
                tracing::warn!("Failed to fetch indexers, tracker requirements skipped: {}", e);
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    let overrides = SeedingOverrideRepository::new(db).find_all().await?;
    let media_items = MediaItemRepository::new(db).find_all().await?;
    let matcher = MediaMatcher::new(&media_items);

    let mut summary = TorrentSyncSummary::default();
    for info in torrents {
        let resolved = resolve_tracker(&info.tracker, &indexers, &overrides);
        let media_item_id = match matcher.resolve(&info.content_path, &info.name) {
            Some((id, rule)) => {
                tracing::debug!("Matched torrent {} to media item {} by {:?}", info.hash, id, rule);
                Some(id)
            }
            None => None,
        };

        let hash = info.hash.clone();
        match torrent_repo.upsert(to_upsert(info, media_item_id, resolved)).await {
            Ok(_) => {
                summary.synced += 1;
                if media_item_id.is_some() {
                    summary.linked += 1;
                }
            }
            Err(e) => tracing::error!("Failed to store torrent {}: {}", hash, e),
        }
    }

    match torrent_repo.count_unlinked().await {
        Ok(unlinked) => {
            summary.unlinked = unlinked as usize;
            if unlinked > 0 {
                tracing::info!("{} torrent(s) are not linked to any media item", unlinked);
            }
        }
        Err(e) => tracing::warn!("Failed to count unlinked torrents: {}", e),
    }

    Ok(summary)
}

fn to_upsert(
    info: TorrentInfo,
    media_item_id: Option<i32>,
    resolved: ResolvedTracker,
) -> TorrentUpsert {
    let is_seeding = info.is_seeding();

    TorrentUpsert {
        hash: info.hash,
        name: info.name,
        content_path: Some(info.content_path).filter(|p| !p.is_empty()),
        media_item_id,
        tracker_id: resolved.tracker_id,
        tracker_name: resolved.tracker_name,
        tracker_type: resolved.tracker_type,
        added_date: time::from_unix_seconds(info.added_on),
        seeding_time_seconds: info.seeding_time,
        upload_bytes: info.uploaded,
        download_bytes: info.downloaded,
        ratio: info.ratio,
        seeding_required_seconds: resolved.required_seconds,
        seeding_required_ratio: resolved.required_ratio,
        is_seeding,
    }
}
