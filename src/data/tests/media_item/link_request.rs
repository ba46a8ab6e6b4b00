//! Tests for MediaItemRepository::link_request method.

use super::*;

/// Expect the request and requesting user to be stored
#[tokio::test]
async fn stores_request_and_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let item = test.media().insert_movie(1, 603, "The Matrix", None).await?;

    let media_item_repo = MediaItemRepository::new(&test.db);
    media_item_repo.link_request(item.id, 12, Some(5)).await?;

    let linked = media_item_repo.find_by_id(item.id).await?.unwrap();
    assert_eq!(linked.overseerr_request_id, Some(12));
    assert_eq!(linked.requested_by_user_id, Some(5));

    Ok(())
}

/// Expect a request without a requester to keep the stored owner
#[tokio::test]
async fn missing_requester_keeps_owner() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let item = test.media().insert_movie(1, 603, "The Matrix", None).await?;

    let media_item_repo = MediaItemRepository::new(&test.db);
    media_item_repo.link_request(item.id, 12, Some(5)).await?;
    media_item_repo.link_request(item.id, 13, None).await?;

    let linked = media_item_repo.find_by_id(item.id).await?.unwrap();
    assert_eq!(linked.overseerr_request_id, Some(13));
    assert_eq!(linked.requested_by_user_id, Some(5));

    Ok(())
}
