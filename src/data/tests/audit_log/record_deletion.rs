//! Tests for AuditLogRepository::record_deletion method.

use super::*;

/// Expect the entry to snapshot title and type with the delete action
#[tokio::test]
async fn records_snapshot() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let item = test.media().insert_series(4, 81189, "Breaking Bad", None).await?;

    let audit_repo = AuditLogRepository::new(&test.db);
    let entry = audit_repo
        .record_deletion(
            1,
            item.id,
            &item.title,
            item.media_type,
            "Deleted media: Breaking Bad (type: series)".to_string(),
        )
        .await?;

    assert_eq!(entry.action, ACTION_DELETE);
    assert_eq!(entry.media_type, "series");
    assert_eq!(entry.media_item_id, Some(item.id));

    Ok(())
}

/// Expect the entry to outlive the media item with its reference cleared
#[tokio::test]
async fn survives_media_item_deletion() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let item = test.media().insert_movie(1, 603, "The Matrix", None).await?;

    let audit_repo = AuditLogRepository::new(&test.db);
    audit_repo
        .record_deletion(1, item.id, &item.title, item.media_type, String::new())
        .await?;
    MediaItemRepository::new(&test.db).delete_by_id(item.id).await?;

    let entries = audit_repo.find_by_title("The Matrix").await?;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].media_item_id.is_none());

    let recent = audit_repo.find_recent(10).await?;
    assert_eq!(recent.len(), 1);

    Ok(())
}
