//! Eligibility results.

use entity::sea_orm_active_enums::TrackerType;

/// Verdict for a single linked torrent.
#[derive(Debug, Clone, PartialEq)]
pub struct TorrentVerdict {
    pub hash: String,
    pub eligible: bool,
    pub reason: String,
    pub tracker_type: TrackerType,
    pub seeding_time_seconds: i64,
    /// `None` means the tracker sets no time requirement.
    pub required_seeding_time_seconds: Option<i64>,
    pub ratio: f64,
    pub required_ratio: Option<f64>,
    pub is_seeding: bool,
}

/// Whether a media item may be deleted, and why.
///
/// Summary stats come from the first failing torrent when the item is not
/// eligible, otherwise from the first linked torrent. Every torrent's verdict is
/// available in `torrents`.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityStatus {
    pub media_item_id: i32,
    pub eligible: bool,
    pub reason: String,
    pub seeding_time_seconds: Option<i64>,
    pub required_seeding_time_seconds: Option<i64>,
    pub ratio: Option<f64>,
    pub required_ratio: Option<f64>,
    pub tracker_type: Option<TrackerType>,
    pub is_seeding: bool,
    pub torrents: Vec<TorrentVerdict>,
}
