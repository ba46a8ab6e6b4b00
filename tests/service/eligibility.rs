//! Tests for EligibilityService::check.

use entity::sea_orm_active_enums::TrackerType;
use removarr::{
    error::Error,
    service::eligibility::{EligibilityService, ALL_MET_REASON, NO_TORRENTS_REASON},
};
use removarr_test_utils::prelude::*;
use sea_orm::ActiveValue;

/// Expect an item without torrents to be ineligible with a reason rather than an error
#[tokio::test]
async fn no_torrents_is_not_an_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let movie = test.media().insert_movie(1, 603, "The Matrix", None).await?;

    let status = EligibilityService::new(&test.db).check(movie.id).await.unwrap();

    assert!(!status.eligible);
    assert_eq!(status.reason, NO_TORRENTS_REASON);
    assert!(status.torrents.is_empty());
    assert!(status.tracker_type.is_none());

    Ok(())
}

/// Expect a missing media item to be reported as not found
#[tokio::test]
async fn missing_item_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;

    let result = EligibilityService::new(&test.db).check(42).await;

    assert!(matches!(result, Err(Error::MediaItemNotFound(42))));

    Ok(())
}

/// Expect one failing torrent to decide the verdict for the whole item
#[tokio::test]
async fn failing_torrent_decides_verdict() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let movie = test.media().insert_movie(1, 603, "The Matrix", None).await?;

    let mut public = factory::mock_torrent("pub", Some(movie.id));
    public.tracker_type = ActiveValue::Set(TrackerType::Public);
    test.media().insert_torrent(public).await?;

    let mut private = factory::mock_torrent("priv", Some(movie.id));
    private.seeding_required_seconds = ActiveValue::Set(Some(259200));
    private.seeding_time_seconds = ActiveValue::Set(3600);
    private.is_seeding = ActiveValue::Set(true);
    test.media().insert_torrent(private).await?;

    let status = EligibilityService::new(&test.db).check(movie.id).await.unwrap();

    assert!(!status.eligible);
    assert_eq!(status.reason, "seeding time 3600s < required 259200s");
    assert_eq!(status.tracker_type, Some(TrackerType::Private));
    assert_eq!(status.seeding_time_seconds, Some(3600));
    assert_eq!(status.required_seeding_time_seconds, Some(259200));
    assert_eq!(status.torrents.len(), 2);
    assert_eq!(status.torrents.iter().filter(|t| t.eligible).count(), 1);

    Ok(())
}

/// Expect an item whose torrents all satisfy their trackers to be eligible
#[tokio::test]
async fn all_requirements_met() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let series = test.media().insert_series(1, 81189, "Breaking Bad", None).await?;

    let mut private = factory::mock_torrent("priv", Some(series.id));
    private.seeding_required_seconds = ActiveValue::Set(Some(259200));
    private.seeding_required_ratio = ActiveValue::Set(Some(1.0));
    private.seeding_time_seconds = ActiveValue::Set(300000);
    private.ratio = ActiveValue::Set(1.5);
    private.is_seeding = ActiveValue::Set(true);
    test.media().insert_torrent(private).await?;

    let other = factory::mock_torrent("other", None);
    test.media().insert_torrent(other).await?;

    let status = EligibilityService::new(&test.db).check(series.id).await.unwrap();

    assert!(status.eligible);
    assert_eq!(status.reason, ALL_MET_REASON);
    assert_eq!(status.ratio, Some(1.5));
    assert_eq!(status.required_ratio, Some(1.0));
    assert_eq!(status.required_seeding_time_seconds, Some(259200));
    assert!(status.is_seeding);
    assert_eq!(status.torrents.len(), 1);

    Ok(())
}
