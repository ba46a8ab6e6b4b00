//! Tests for TorrentRepository::find_by_hash method.

use super::*;

/// Expect a stored torrent to be found by hash and an unknown hash to be absent
#[tokio::test]
async fn finds_by_hash() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;

    let torrent_repo = TorrentRepository::new(&test.db);
    torrent_repo.upsert(torrent_upsert("abc", None)).await?;

    let found = torrent_repo.find_by_hash("abc").await?.unwrap();
    assert_eq!(found.name, "torrent-abc");
    assert!(torrent_repo.find_by_hash("missing").await?.is_none());

    Ok(())
}
