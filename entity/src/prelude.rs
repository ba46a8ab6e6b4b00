pub use super::audit_log::Entity as AuditLog;
pub use super::media_item::Entity as MediaItem;
pub use super::seeding_override::Entity as SeedingOverride;
pub use super::setting::Entity as Setting;
pub use super::torrent::Entity as Torrent;
pub use super::watch_history::Entity as WatchHistory;
