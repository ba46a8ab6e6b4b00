//! Active models with default test values, ready to insert or tweak.

use chrono::Utc;
use entity::sea_orm_active_enums::{MediaType, TrackerType};
use sea_orm::ActiveValue;

/// Create a series row owned by Sonarr.
///
/// # Arguments
/// - `sonarr_id` - Sonarr series ID
/// - `tvdb_id` - TVDB ID used to match requests
/// - `title` - Series title
/// - `file_path` - Series folder, `None` if nothing is downloaded
pub fn mock_series(
    sonarr_id: i32,
    tvdb_id: i32,
    title: &str,
    file_path: Option<&str>,
) -> entity::media_item::ActiveModel {
    let mut model = mock_media_item(MediaType::Series, title, file_path);
    model.sonarr_id = ActiveValue::Set(Some(sonarr_id));
    model.tvdb_id = ActiveValue::Set(Some(tvdb_id));
    model
}

/// Create a movie row owned by Radarr.
///
/// # Arguments
/// - `radarr_id` - Radarr movie ID
/// - `tmdb_id` - TMDB ID used to match requests
/// - `title` - Movie title
/// - `file_path` - Movie folder or file, `None` if nothing is downloaded
pub fn mock_movie(
    radarr_id: i32,
    tmdb_id: i32,
    title: &str,
    file_path: Option<&str>,
) -> entity::media_item::ActiveModel {
    let mut model = mock_media_item(MediaType::Movie, title, file_path);
    model.radarr_id = ActiveValue::Set(Some(radarr_id));
    model.tmdb_id = ActiveValue::Set(Some(tmdb_id));
    model
}

fn mock_media_item(
    media_type: MediaType,
    title: &str,
    file_path: Option<&str>,
) -> entity::media_item::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::media_item::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        media_type: ActiveValue::Set(media_type),
        tmdb_id: ActiveValue::Set(None),
        tvdb_id: ActiveValue::Set(None),
        sonarr_id: ActiveValue::Set(None),
        radarr_id: ActiveValue::Set(None),
        overseerr_request_id: ActiveValue::Set(None),
        requested_by_user_id: ActiveValue::Set(None),
        file_path: ActiveValue::Set(file_path.map(str::to_string)),
        file_size: ActiveValue::Set(if file_path.is_some() { 1024 } else { 0 }),
        added_date: ActiveValue::Set(Some(now)),
        last_synced_at: ActiveValue::Set(now),
        created_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Create a torrent on a private tracker with no requirements and no seeding.
///
/// # Arguments
/// - `hash` - Torrent hash
/// - `media_item_id` - Linked media item, `None` for an unmatched torrent
pub fn mock_torrent(hash: &str, media_item_id: Option<i32>) -> entity::torrent::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::torrent::ActiveModel {
        media_item_id: ActiveValue::Set(media_item_id),
        hash: ActiveValue::Set(hash.to_string()),
        name: ActiveValue::Set(format!("torrent-{hash}")),
        content_path: ActiveValue::Set(None),
        tracker_id: ActiveValue::Set(None),
        tracker_name: ActiveValue::Set(Some("https://tracker.example.org/announce".to_string())),
        tracker_type: ActiveValue::Set(TrackerType::Private),
        added_date: ActiveValue::Set(Some(now)),
        seeding_time_seconds: ActiveValue::Set(0),
        upload_bytes: ActiveValue::Set(0),
        download_bytes: ActiveValue::Set(1024),
        ratio: ActiveValue::Set(0.0),
        seeding_required_seconds: ActiveValue::Set(None),
        seeding_required_ratio: ActiveValue::Set(None),
        is_seeding: ActiveValue::Set(false),
        last_synced_at: ActiveValue::Set(now),
        ..Default::default()
    }
}
