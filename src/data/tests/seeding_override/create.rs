//! Tests for SeedingOverrideRepository::create method.

use super::*;

/// Expect created overrides to be listed in creation order
#[tokio::test]
async fn creates_and_lists() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;

    let override_repo = SeedingOverrideRepository::new(&test.db);
    override_repo
        .create(override_input("TorrentLeech", Some(864000), None))
        .await?;
    override_repo
        .create(override_input("PrivateHD", None, Some(1.0)))
        .await?;

    let overrides = override_repo.find_all().await?;
    assert_eq!(overrides.len(), 2);
    assert_eq!(overrides[0].tracker_name.as_deref(), Some("TorrentLeech"));
    assert_eq!(overrides[1].min_ratio, Some(1.0));

    Ok(())
}
