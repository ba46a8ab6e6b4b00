//! Tests for SyncService::sync_torrents.

use super::*;

/// Expect a torrent inside a movie folder to link by path and pick up indexer requirements
#[tokio::test]
async fn links_by_path_and_applies_indexer_requirements() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_media_tables()
        .with_integration("qbittorrent")
        .with_integration("prowlarr")
        .with_indexer_endpoint(
            vec![payload::indexer(3, "PrivateHD", "private", Some(432000), Some(1.0))],
            1,
        )
        .with_torrent_endpoint(
            vec![payload::torrent(
                "abc",
                "The.Matrix.1999.1080p",
                "/data/movies/The Matrix (1999)/The Matrix (1999).mkv",
                "https://tracker.privatehd.to/a/passkey/announce",
                "uploading",
            )],
            1,
        )
        .build()
        .await?;
    let movie = test
        .media()
        .insert_movie(1, 603, "The Matrix", Some("/data/movies/The Matrix (1999)"))
        .await?;

    let integrations = integrations(&test).await;
    let gate = StoreGate::new();
    let summary = SyncService::new(&test.db, &integrations, &gate)
        .sync_torrents()
        .await
        .unwrap();

    let torrent = TorrentRepository::new(&test.db)
        .find_by_hash("abc")
        .await?
        .unwrap();

    assert_eq!(summary.synced, 1);
    assert_eq!(summary.linked, 1);
    assert_eq!(summary.unlinked, 0);
    assert_eq!(torrent.media_item_id, Some(movie.id));
    assert_eq!(torrent.tracker_type, TrackerType::Private);
    assert_eq!(torrent.tracker_id, Some(3));
    assert_eq!(torrent.tracker_name.as_deref(), Some("PrivateHD"));
    assert_eq!(torrent.seeding_required_seconds, Some(432000));
    assert_eq!(torrent.seeding_required_ratio, Some(1.0));
    assert!(torrent.is_seeding);

    test.assert_mocks();

    Ok(())
}

/// Expect an override keyed by indexer ID to replace only the dimension it sets
#[tokio::test]
async fn override_replaces_indexer_requirement() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_media_tables()
        .with_integration("qbittorrent")
        .with_integration("prowlarr")
        .with_indexer_endpoint(
            vec![payload::indexer(3, "PrivateHD", "private", Some(432000), Some(1.0))],
            1,
        )
        .with_torrent_endpoint(
            vec![payload::torrent(
                "abc",
                "Some.Release",
                "/downloads/Some.Release",
                "https://tracker.privatehd.to/announce",
                "stalledUP",
            )],
            1,
        )
        .build()
        .await?;
    test.media()
        .insert_override(Some(3), None, Some(86400), None)
        .await?;

    let integrations = integrations(&test).await;
    let gate = StoreGate::new();
    SyncService::new(&test.db, &integrations, &gate)
        .sync_torrents()
        .await
        .unwrap();

    let torrent = entity::prelude::Torrent::find().one(&test.db).await?.unwrap();

    assert_eq!(torrent.seeding_required_seconds, Some(86400));
    assert_eq!(torrent.seeding_required_ratio, Some(1.0));

    test.assert_mocks();

    Ok(())
}

/// Expect an unreachable indexer manager to fall back to the public allow-list
#[tokio::test]
async fn indexer_failure_is_not_fatal() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_media_tables()
        .with_integration("qbittorrent")
        .with_integration("prowlarr")
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/v1/indexer")
                .with_status(500)
                .expect(1)
                .create()
        })
        .with_torrent_endpoint(
            vec![
                payload::torrent(
                    "pub",
                    "[SubsPlease] Show - 01",
                    "/downloads/[SubsPlease] Show - 01.mkv",
                    "http://nyaa.tracker.wf:7777/announce",
                    "uploading",
                ),
                payload::torrent(
                    "priv",
                    "Other.Release",
                    "/downloads/Other.Release",
                    "https://tracker.privatehd.to/announce",
                    "pausedUP",
                ),
            ],
            1,
        )
        .build()
        .await?;

    let integrations = integrations(&test).await;
    let gate = StoreGate::new();
    let summary = SyncService::new(&test.db, &integrations, &gate)
        .sync_torrents()
        .await
        .unwrap();

    let torrent_repo = TorrentRepository::new(&test.db);
    let public = torrent_repo.find_by_hash("pub").await?.unwrap();
    let private = torrent_repo.find_by_hash("priv").await?.unwrap();

    assert_eq!(summary.synced, 2);
    assert_eq!(summary.linked, 0);
    assert_eq!(summary.unlinked, 2);
    assert_eq!(public.tracker_type, TrackerType::Public);
    assert_eq!(private.tracker_type, TrackerType::Private);
    assert!(private.tracker_id.is_none());
    assert!(!private.is_seeding);

    test.assert_mocks();

    Ok(())
}

/// Expect a second pass to refresh stats without duplicating rows
#[tokio::test]
async fn resync_refreshes_existing_rows() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_media_tables()
        .with_integration("qbittorrent")
        .with_torrent_endpoint(
            vec![payload::torrent(
                "abc",
                "Breaking.Bad.S01",
                "/data/tv/Breaking Bad/Season 01",
                "",
                "uploading",
            )],
            2,
        )
        .build()
        .await?;
    test.media()
        .insert_series(1, 81189, "Breaking Bad", Some("/data/tv/Breaking Bad"))
        .await?;

    let integrations = integrations(&test).await;
    let gate = StoreGate::new();
    let sync = SyncService::new(&test.db, &integrations, &gate);
    sync.sync_torrents().await.unwrap();
    sync.sync_torrents().await.unwrap();

    let torrents = entity::prelude::Torrent::find().all(&test.db).await?;

    assert_eq!(torrents.len(), 1);
    assert_eq!(torrents[0].tracker_type, TrackerType::Unknown);
    assert_eq!(torrents[0].seeding_time_seconds, 7200);
    assert_eq!(torrents[0].ratio, 2.0);

    test.assert_mocks();

    Ok(())
}
