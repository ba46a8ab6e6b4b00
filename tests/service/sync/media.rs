//! Tests for SyncService::sync_series and SyncService::sync_movies.

use super::*;

/// Expect two passes over an unchanged list to leave the same rows
///
/// Expected: 2 series after each pass, no duplicates, identical fields
#[tokio::test]
async fn series_sync_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_media_tables()
        .with_integration("sonarr")
        .with_series_endpoint(
            vec![
                payload::series(1, 81189, "Breaking Bad", Some("/data/tv/Breaking Bad")),
                payload::series(2, 121361, "Game of Thrones", None),
            ],
            2,
        )
        .build()
        .await?;
    let integrations = integrations(&test).await;
    let gate = StoreGate::new();
    let sync = SyncService::new(&test.db, &integrations, &gate);

    assert_eq!(sync.sync_series().await.unwrap(), 2);
    let first = entity::prelude::MediaItem::find().all(&test.db).await?;

    assert_eq!(sync.sync_series().await.unwrap(), 2);
    let second = entity::prelude::MediaItem::find().all(&test.db).await?;

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    for (before, after) in first.iter().zip(second.iter()) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.sonarr_id, after.sonarr_id);
        assert_eq!(before.title, after.title);
        assert_eq!(before.file_path, after.file_path);
        assert_eq!(before.file_size, after.file_size);
    }

    let undownloaded = second.iter().find(|s| s.sonarr_id == Some(2)).unwrap();
    assert_eq!(undownloaded.media_type, MediaType::Series);
    assert_eq!(undownloaded.file_size, 0);
    assert!(undownloaded.file_path.is_none());

    test.assert_mocks();

    Ok(())
}

/// Expect a movie sync to keep the request linkage set earlier
#[tokio::test]
async fn movie_sync_preserves_request_linkage() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_media_tables()
        .with_integration("radarr")
        .with_movie_endpoint(
            vec![payload::movie(1, 603, "The Matrix", Some("/data/movies/The Matrix (1999)"))],
            1,
        )
        .build()
        .await?;
    let item = test.media().insert_movie(1, 603, "The Matrix", None).await?;
    removarr::data::media_item::MediaItemRepository::new(&test.db)
        .link_request(item.id, 77, Some(4))
        .await?;

    let integrations = integrations(&test).await;
    let gate = StoreGate::new();
    let synced = SyncService::new(&test.db, &integrations, &gate)
        .sync_movies()
        .await
        .unwrap();

    let refreshed = entity::prelude::MediaItem::find_by_id(item.id)
        .one(&test.db)
        .await?
        .unwrap();

    assert_eq!(synced, 1);
    assert_eq!(refreshed.overseerr_request_id, Some(77));
    assert_eq!(refreshed.requested_by_user_id, Some(4));
    assert_eq!(
        refreshed.file_path.as_deref(),
        Some("/data/movies/The Matrix (1999)")
    );
    assert_eq!(refreshed.file_size, 8192);

    test.assert_mocks();

    Ok(())
}

/// Expect a disabled integration to be reported, not silently skipped
#[tokio::test]
async fn disabled_integration_is_an_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;
    let integrations = integrations(&test).await;
    let gate = StoreGate::new();

    let result = SyncService::new(&test.db, &integrations, &gate)
        .sync_series()
        .await;

    assert!(matches!(
        result,
        Err(Error::ConfigError(ConfigError::IntegrationDisabled(
            Service::Sonarr
        )))
    ));

    Ok(())
}

/// Expect a failing fetch to surface as an error
#[tokio::test]
async fn fetch_failure_is_an_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_media_tables()
        .with_integration("radarr")
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/v3/movie")
                .with_status(500)
                .with_body("database is locked")
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let integrations = integrations(&test).await;
    let gate = StoreGate::new();

    let result = SyncService::new(&test.db, &integrations, &gate)
        .sync_movies()
        .await;

    assert!(matches!(result, Err(Error::IntegrationError(_))));
    assert_eq!(entity::prelude::MediaItem::find().count(&test.db).await?, 0);

    test.assert_mocks();

    Ok(())
}
