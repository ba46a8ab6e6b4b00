//! Tests for TorrentRepository::upsert method.

use super::*;

/// Expect a second upsert for the same hash to refresh the row
#[tokio::test]
async fn refreshes_existing_hash() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;

    let torrent_repo = TorrentRepository::new(&test.db);
    let first = torrent_repo.upsert(torrent_upsert("abc", None)).await?;

    let mut update = torrent_upsert("abc", None);
    update.seeding_time_seconds = 9000;
    update.ratio = 1.5;
    let second = torrent_repo.upsert(update).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.seeding_time_seconds, 9000);
    assert_eq!(second.ratio, 1.5);
    assert_eq!(entity::prelude::Torrent::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect an existing link to survive a pass that matched nothing
#[tokio::test]
async fn keeps_link_when_unresolved() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let item = test.media().insert_movie(1, 603, "The Matrix", None).await?;

    let torrent_repo = TorrentRepository::new(&test.db);
    torrent_repo.upsert(torrent_upsert("abc", Some(item.id))).await?;
    let refreshed = torrent_repo.upsert(torrent_upsert("abc", None)).await?;

    assert_eq!(refreshed.media_item_id, Some(item.id));

    Ok(())
}

/// Expect a newly resolved link to replace the previous one
#[tokio::test]
async fn relinks_when_resolved_differently() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let first = test.media().insert_movie(1, 603, "The Matrix", None).await?;
    let second = test.media().insert_movie(2, 604, "Heat", None).await?;

    let torrent_repo = TorrentRepository::new(&test.db);
    torrent_repo.upsert(torrent_upsert("abc", Some(first.id))).await?;
    let refreshed = torrent_repo
        .upsert(torrent_upsert("abc", Some(second.id)))
        .await?;

    assert_eq!(refreshed.media_item_id, Some(second.id));

    Ok(())
}
