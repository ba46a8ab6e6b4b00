//! JSON bodies shaped like the external services' API responses.

use serde_json::{json, Value};

/// Sonarr series with a quality profile, root folder and size on disk.
pub fn series(id: i32, tvdb_id: i32, title: &str, path: Option<&str>) -> Value {
    json!({
        "id": id,
        "title": title,
        "path": path,
        "tvdbId": tvdb_id,
        "monitored": true,
        "status": "continuing",
        "added": "2024-03-01T12:30:00Z",
        "qualityProfileId": 4,
        "rootFolderPath": "/data/tv",
        "seasonFolder": true,
        "statistics": { "sizeOnDisk": if path.is_some() { 4096 } else { 0 }, "episodeCount": 10 }
    })
}

/// Radarr movie with a quality profile, root folder and size on disk.
pub fn movie(id: i32, tmdb_id: i32, title: &str, path: Option<&str>) -> Value {
    json!({
        "id": id,
        "title": title,
        "path": path,
        "tmdbId": tmdb_id,
        "monitored": true,
        "status": "released",
        "added": "2024-03-01T12:30:00Z",
        "qualityProfileId": 6,
        "rootFolderPath": "/data/movies",
        "minimumAvailability": "released",
        "statistics": { "sizeOnDisk": if path.is_some() { 8192 } else { 0 } }
    })
}

/// Overseerr request for a movie (`"movie"`) or series (`"tv"`).
pub fn request(
    id: i32,
    media_type: &str,
    tmdb_id: Option<i32>,
    tvdb_id: Option<i32>,
    requested_by: i32,
) -> Value {
    json!({
        "id": id,
        "mediaType": media_type,
        "status": 2,
        "requestedBy": { "id": requested_by, "displayName": "requester" },
        "media": {
            "id": id + 1000,
            "tmdbId": tmdb_id,
            "tvdbId": tvdb_id,
            "mediaType": media_type
        }
    })
}

/// Prowlarr indexer with flattened minimum seeding requirements.
pub fn indexer(
    id: i32,
    name: &str,
    privacy: &str,
    min_seed_time: Option<i64>,
    min_ratio: Option<f64>,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "protocol": "torrent",
        "privacy": privacy,
        "enable": true,
        "minSeedTime": min_seed_time,
        "minRatio": min_ratio
    })
}

/// qBittorrent torrent info entry.
pub fn torrent(hash: &str, name: &str, content_path: &str, tracker: &str, state: &str) -> Value {
    json!({
        "hash": hash,
        "name": name,
        "size": 1073741824i64,
        "state": state,
        "seeding_time": 7200,
        "uploaded": 2147483648i64,
        "downloaded": 1073741824i64,
        "ratio": 2.0,
        "added_on": 1709296200,
        "tracker": tracker,
        "content_path": content_path,
        "category": "radarr"
    })
}
