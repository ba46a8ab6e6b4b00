use super::*;
use crate::data::media_item::{MediaItemRepository, MediaItemUpsert};

mod find_by_external_id;
mod link_request;

fn movie_upsert(radarr_id: i32, title: &str, path: Option<&str>) -> MediaItemUpsert {
    MediaItemUpsert {
        title: title.to_string(),
        media_type: MediaType::Movie,
        manager_id: radarr_id,
        tmdb_id: Some(radarr_id * 100),
        tvdb_id: None,
        file_path: path.map(str::to_string),
        file_size: if path.is_some() { 2048 } else { 0 },
        added_date: None,
    }
}
