//! Tests for SeedingOverrideRepository::update method.

use super::*;

/// Expect thresholds to be replaced
#[tokio::test]
async fn replaces_thresholds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;

    let override_repo = SeedingOverrideRepository::new(&test.db);
    let created = override_repo
        .create(override_input("TorrentLeech", Some(864000), None))
        .await?;

    let updated = override_repo
        .update(created.id, override_input("TorrentLeech", None, Some(2.0)))
        .await?
        .unwrap();

    assert!(updated.min_seeding_time_seconds.is_none());
    assert_eq!(updated.min_ratio, Some(2.0));

    Ok(())
}

/// Expect None for an unknown override
#[tokio::test]
async fn returns_none_for_missing_override() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;

    let override_repo = SeedingOverrideRepository::new(&test.db);
    let result = override_repo
        .update(999, override_input("TorrentLeech", None, None))
        .await?;

    assert!(result.is_none());

    Ok(())
}
