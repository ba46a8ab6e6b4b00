//! Tests for TorrentRepository::count_unlinked method.

use super::*;

/// Expect only torrents without a media item to be counted
#[tokio::test]
async fn counts_torrents_without_media_item() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let item = test.media().insert_movie(1, 603, "The Matrix", None).await?;
    test.media()
        .insert_torrent(factory::mock_torrent("linked", Some(item.id)))
        .await?;
    test.media()
        .insert_torrent(factory::mock_torrent("loose-1", None))
        .await?;

    let mut loose = factory::mock_torrent("loose-2", None);
    loose.tracker_type = ActiveValue::Set(TrackerType::Unknown);
    test.media().insert_torrent(loose).await?;

    let torrent_repo = TorrentRepository::new(&test.db);

    assert_eq!(torrent_repo.count_unlinked().await?, 2);

    Ok(())
}
