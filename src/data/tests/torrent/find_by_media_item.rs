//! Tests for TorrentRepository::find_by_media_item method.

use super::*;

/// Expect only torrents linked to the media item, in insertion order
#[tokio::test]
async fn returns_linked_torrents() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let item = test.media().insert_movie(1, 603, "The Matrix", None).await?;
    test.media()
        .insert_torrent(factory::mock_torrent("first", Some(item.id)))
        .await?;
    test.media()
        .insert_torrent(factory::mock_torrent("unlinked", None))
        .await?;
    test.media()
        .insert_torrent(factory::mock_torrent("second", Some(item.id)))
        .await?;

    let torrent_repo = TorrentRepository::new(&test.db);
    let torrents = torrent_repo.find_by_media_item(item.id).await?;

    let hashes: Vec<&str> = torrents.iter().map(|t| t.hash.as_str()).collect();
    assert_eq!(hashes, vec!["first", "second"]);

    Ok(())
}
