//! Tests for MediaItemRepository::find_by_external_id method.

use super::*;

/// Expect movies to be found by TMDB ID and series by TVDB ID
#[tokio::test]
async fn finds_by_type_specific_id() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let movie = test.media().insert_movie(1, 603, "The Matrix", None).await?;
    let series = test.media().insert_series(1, 81189, "Breaking Bad", None).await?;

    let media_item_repo = MediaItemRepository::new(&test.db);

    let found_movie = media_item_repo.find_by_external_id(MediaType::Movie, 603).await?;
    let found_series = media_item_repo
        .find_by_external_id(MediaType::Series, 81189)
        .await?;

    assert_eq!(found_movie.map(|m| m.id), Some(movie.id));
    assert_eq!(found_series.map(|s| s.id), Some(series.id));

    Ok(())
}

/// Expect no match when the ID belongs to the other media type
#[tokio::test]
async fn ignores_other_media_type() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    test.media().insert_movie(1, 603, "The Matrix", None).await?;

    let media_item_repo = MediaItemRepository::new(&test.db);
    let result = media_item_repo
        .find_by_external_id(MediaType::Series, 603)
        .await?;

    assert!(result.is_none());

    Ok(())
}
