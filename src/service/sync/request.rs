use entity::sea_orm_active_enums::MediaType;
use sea_orm::DatabaseConnection;

use crate::{
    data::media_item::MediaItemRepository,
    error::Error,
    integration::overseerr::{MediaRequest, OverseerrClient},
};

/// Links media items to the requests that brought them in.
///
/// Requests whose media is not tracked locally are skipped.
///
/// # Returns
/// - `Ok(usize)` - Number of media items linked
/// - `Err(Error)` - Fetching requests failed
pub(super) async fn sync_requests(
    db: &DatabaseConnection,
    client: &OverseerrClient,
) -> Result<usize, Error> {
    let media_item_repo = MediaItemRepository::new(db);

    let requests = client.list_all().await?;
    tracing::info!("Fetched {} request(s) from overseerr", requests.len());

    let mut linked = 0;
    for request in requests {
        let Some((media_type, external_id)) = lookup_key(&request) else {
            continue;
        };

        let item = match media_item_repo
            .find_by_external_id(media_type, external_id)
            .await
        {
            Ok(Some(item)) => item,
            Ok(None) => continue,
            Err(e) => {
                tracing::error!("Failed to look up media for request {}: {}", request.id, e);
                continue;
            }
        };

        match media_item_repo
            .link_request(item.id, request.id, request.requested_by_id())
            .await
        {
            Ok(()) => {
                tracing::debug!("Linked request {} to media item {}", request.id, item.id);
                linked += 1;
            }
            Err(e) => tracing::error!(
                "Failed to link request {} to media item {}: {}",
                request.id,
                item.id,
                e
            ),
        }
    }

    Ok(linked)
}

/// Local media type and the media database ID used to find the item.
fn lookup_key(request: &MediaRequest) -> Option<(MediaType, i32)> {
    match request.effective_media_type()? {
        MediaType::Movie => Some((MediaType::Movie, request.tmdb_id()?)),
        MediaType::Series => Some((MediaType::Series, request.tvdb_id()?)),
    }
}
