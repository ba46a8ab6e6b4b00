//! Tests for SyncService::sync_requests.

use super::*;

/// Expect movie and tv requests to link to the matching local items only
#[tokio::test]
async fn links_matching_requests() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_media_tables()
        .with_integration("overseerr")
        .with_request_endpoint(
            vec![
                payload::request(10, "movie", Some(603), None, 5),
                payload::request(11, "tv", Some(1396), Some(81189), 6),
                payload::request(12, "movie", Some(999), None, 7),
            ],
            1,
        )
        .build()
        .await?;
    let movie = test.media().insert_movie(1, 603, "The Matrix", None).await?;
    let series = test.media().insert_series(1, 81189, "Breaking Bad", None).await?;

    let integrations = integrations(&test).await;
    let gate = StoreGate::new();
    let linked = SyncService::new(&test.db, &integrations, &gate)
        .sync_requests()
        .await
        .unwrap();

    let movie = entity::prelude::MediaItem::find_by_id(movie.id)
        .one(&test.db)
        .await?
        .unwrap();
    let series = entity::prelude::MediaItem::find_by_id(series.id)
        .one(&test.db)
        .await?
        .unwrap();

    assert_eq!(linked, 2);
    assert_eq!(movie.overseerr_request_id, Some(10));
    assert_eq!(movie.requested_by_user_id, Some(5));
    assert_eq!(series.overseerr_request_id, Some(11));
    assert_eq!(series.requested_by_user_id, Some(6));

    test.assert_mocks();

    Ok(())
}

/// Expect a disabled request manager to be a no-op
#[tokio::test]
async fn disabled_overseerr_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;
    let integrations = integrations(&test).await;
    let gate = StoreGate::new();

    let linked = SyncService::new(&test.db, &integrations, &gate)
        .sync_requests()
        .await
        .unwrap();

    assert_eq!(linked, 0);

    Ok(())
}

/// Expect requests on every page to be linked, not just the first page
#[tokio::test]
async fn links_requests_across_pages() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_media_tables()
        .with_integration("overseerr")
        .build()
        .await?;
    let movie = test.media().insert_movie(1, 603, "The Matrix", None).await?;
    let series = test.media().insert_series(1, 81189, "Breaking Bad", None).await?;

    let first_page = test.remote().create_request_page_endpoint(
        vec![payload::request(10, "movie", Some(603), None, 5)],
        0,
        1,
        2,
    );
    let second_page = test.remote().create_request_page_endpoint(
        vec![payload::request(11, "tv", None, Some(81189), 6)],
        1000,
        2,
        2,
    );

    let integrations = integrations(&test).await;
    let gate = StoreGate::new();
    let linked = SyncService::new(&test.db, &integrations, &gate)
        .sync_requests()
        .await
        .unwrap();

    let media_item_repo = MediaItemRepository::new(&test.db);
    let movie = media_item_repo.find_by_id(movie.id).await?.unwrap();
    let series = media_item_repo.find_by_id(series.id).await?.unwrap();

    assert_eq!(linked, 2);
    assert_eq!(movie.overseerr_request_id, Some(10));
    assert_eq!(series.overseerr_request_id, Some(11));

    first_page.assert();
    second_page.assert();

    Ok(())
}
