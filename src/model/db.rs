//! Database model type aliases.

/// Type alias for a tracked movie or series.
///
/// # Fields (from `entity::media_item::Model`)
/// - `id` - Primary key
/// - `title` - Title as reported by the media manager
/// - `media_type` - `movie` or `series`
/// - `tmdb_id` / `tvdb_id` - Media database IDs used to match requests
/// - `sonarr_id` / `radarr_id` - Owning media manager ID, one of which is set
/// - `overseerr_request_id` / `requested_by_user_id` - Request linkage, never overwritten by media sync
/// - `file_path` / `file_size` - On-disk location and size, empty/zero when not downloaded
/// - `added_date` - When the manager added the item
/// - `last_synced_at` / `created_at` - Local bookkeeping timestamps
pub type MediaItemModel = entity::media_item::Model;

/// Type alias for a torrent client entry.
///
/// # Fields (from `entity::torrent::Model`)
/// - `hash` - Client-assigned identity, unique
/// - `media_item_id` - Linked media item, `None` while unmatched
/// - `tracker_id` / `tracker_name` / `tracker_type` - Resolved tracker identity
/// - `seeding_time_seconds` / `ratio` / `is_seeding` - Current seeding state
/// - `seeding_required_seconds` / `seeding_required_ratio` - Requirements, `None` when absent
pub type TorrentModel = entity::torrent::Model;

/// Type alias for an operator-configured per-tracker seeding requirement.
pub type SeedingOverrideModel = entity::seeding_override::Model;

/// Type alias for an immutable deletion audit record.
pub type AuditLogModel = entity::audit_log::Model;

/// Type alias for a persisted key/value setting.
pub type SettingModel = entity::setting::Model;
