use sea_orm::DatabaseConnection;

use crate::{
    data::media_item::{MediaItemRepository, MediaItemUpsert},
    error::Error,
    integration::media_manager::{ManagedMedia, ManagerKind, MediaManagerClient},
    util::time,
};

/// Upserts every series or movie the manager reports.
///
/// Items without files are still stored with an empty path and zero size. A
/// database error on one item is logged and the rest of the batch continues.
///
/// # Returns
/// - `Ok(usize)` - Number of items stored
/// - `Err(Error)` - Fetching the list from the manager failed
pub(super) async fn sync_manager<K: ManagerKind>(
    db: &DatabaseConnection,
    client: &MediaManagerClient<K>,
) -> Result<usize, Error> {
    let media_item_repo = MediaItemRepository::new(db);

    let remote = client.list_all().await?;
    tracing::info!("Fetched {} {} item(s) from {}", remote.len(), K::RESOURCE, K::SERVICE);

    let mut synced = 0;
    for media in remote {
        let manager_id = media.id;
        match media_item_repo.upsert_from_manager(to_upsert::<K>(media)).await {
            Ok(_) => synced += 1,
            Err(e) => tracing::error!(
                "Failed to store {} {} from {}: {}",
                K::RESOURCE,
                manager_id,
                K::SERVICE,
                e
            ),
        }
    }

    Ok(synced)
}

fn to_upsert<K: ManagerKind>(media: ManagedMedia) -> MediaItemUpsert {
    let file_size = media.size_on_disk();
    let added_date = time::parse_rfc3339(media.added.as_deref());

    MediaItemUpsert {
        title: media.title,
        media_type: K::MEDIA_TYPE,
        manager_id: media.id,
        tmdb_id: media.tmdb_id.filter(|id| *id > 0),
        tvdb_id: media.tvdb_id.filter(|id| *id > 0),
        file_path: media.path.filter(|p| !p.is_empty()),
        file_size,
        added_date,
    }
}
