//! Tests for SeedingOverrideRepository::delete method.

use super::*;

/// Expect the override to be removed once
#[tokio::test]
async fn deletes_override() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let created = test
        .media()
        .insert_override(Some(3), None, Some(3600), None)
        .await?;

    let override_repo = SeedingOverrideRepository::new(&test.db);

    assert!(override_repo.delete(created.id).await?);
    assert!(!override_repo.delete(created.id).await?);
    assert!(override_repo.find_all().await?.is_empty());

    Ok(())
}
