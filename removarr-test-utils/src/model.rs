//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main removarr crate.

pub type MediaItemModel = entity::media_item::Model;

pub type TorrentModel = entity::torrent::Model;

pub type SeedingOverrideModel = entity::seeding_override::Model;

pub type SettingModel = entity::setting::Model;
