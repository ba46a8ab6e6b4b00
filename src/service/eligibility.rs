//! Whether a media item can be deleted without breaking seeding obligations.

use entity::sea_orm_active_enums::TrackerType;
use sea_orm::DatabaseConnection;

use crate::{
    data::{media_item::MediaItemRepository, torrent::TorrentRepository},
    error::Error,
    model::{
        db::TorrentModel,
        eligibility::{EligibilityStatus, TorrentVerdict},
    },
};

pub const NO_TORRENTS_REASON: &str = "no torrents found for this media item";
/// Reason reported for an item whose torrents all pass.
pub const ALL_MET_REASON: &str = "all seeding requirements met";

pub struct EligibilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EligibilityService<'a> {
    /// Creates a new instance of [`EligibilityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks every torrent linked to a media item; the item is eligible only if all pass.
    ///
    /// Reads only, never mutates the store.
    ///
    /// # Arguments
    /// - `media_item_id` - Local media item ID
    ///
    /// # Returns
    /// - `Ok(EligibilityStatus)` - Verdict with the deciding reason and per-torrent detail
    /// - `Err(Error::MediaItemNotFound)` - No such media item
    /// - `Err(Error::DbErr)` - Database error
    pub async fn check(&self, media_item_id: i32) -> Result<EligibilityStatus, Error> {
        let media_item_repo = MediaItemRepository::new(self.db);
        let torrent_repo = TorrentRepository::new(self.db);

        let Some(item) = media_item_repo.find_by_id(media_item_id).await? else {
            return Err(Error::MediaItemNotFound(media_item_id));
        };

        let torrents = torrent_repo.find_by_media_item(item.id).await?;

        Ok(summarize(item.id, &torrents))
    }
}

/// Combines per-torrent verdicts into one status.
fn summarize(media_item_id: i32, torrents: &[TorrentModel]) -> EligibilityStatus {
    let verdicts: Vec<TorrentVerdict> = torrents.iter().map(check_torrent).collect();

    let failing = verdicts.iter().find(|v| !v.eligible);
    let Some(representative) = failing.or_else(|| verdicts.first()) else {
        return EligibilityStatus {
            media_item_id,
            eligible: false,
            reason: NO_TORRENTS_REASON.to_string(),
            seeding_time_seconds: None,
            required_seeding_time_seconds: None,
            ratio: None,
            required_ratio: None,
            tracker_type: None,
            is_seeding: false,
            torrents: verdicts,
        };
    };

    let reason = match failing {
        Some(v) => v.reason.clone(),
        None => ALL_MET_REASON.to_string(),
    };

    EligibilityStatus {
        media_item_id,
        eligible: failing.is_none(),
        reason,
        seeding_time_seconds: Some(representative.seeding_time_seconds),
        required_seeding_time_seconds: representative.required_seeding_time_seconds,
        ratio: Some(representative.ratio),
        required_ratio: representative.required_ratio,
        tracker_type: Some(representative.tracker_type),
        is_seeding: representative.is_seeding,
        torrents: verdicts,
    }
}

/// Checks a single torrent against its tracker's seeding requirements.
///
/// Public trackers are eligible unless an override sets a threshold they miss. Private and
/// unresolved trackers need an explicit seeding time, must meet every set
/// threshold, and must still be seeding.
pub fn check_torrent(torrent: &TorrentModel) -> TorrentVerdict {
    let (eligible, reason) = match torrent.tracker_type {
        TrackerType::Public => check_public(torrent),
        TrackerType::Private | TrackerType::Unknown => check_private(torrent),
    };

    TorrentVerdict {
        hash: torrent.hash.clone(),
        eligible,
        reason,
        tracker_type: torrent.tracker_type,
        seeding_time_seconds: torrent.seeding_time_seconds,
        required_seeding_time_seconds: torrent.seeding_required_seconds,
        ratio: torrent.ratio,
        required_ratio: torrent.seeding_required_ratio,
        is_seeding: torrent.is_seeding,
    }
}

/// Thresholds only exist on a public tracker when an override sets them.
fn check_public(torrent: &TorrentModel) -> (bool, String) {
    if let Some(reason) = unmet_threshold(torrent) {
        return (false, reason);
    }

    (true, "public tracker - eligible".to_string())
}

fn check_private(torrent: &TorrentModel) -> (bool, String) {
    if torrent.seeding_required_seconds.is_none() {
        return (false, "infinite seeding time required".to_string());
    }

    if let Some(reason) = unmet_threshold(torrent) {
        return (false, reason);
    }

    if !torrent.is_seeding {
        return (false, "torrent is not currently seeding".to_string());
    }

    (true, "all requirements met".to_string())
}

/// Reason for the first required threshold the torrent has not reached.
fn unmet_threshold(torrent: &TorrentModel) -> Option<String> {
    if let Some(required) = torrent.seeding_required_seconds {
        if torrent.seeding_time_seconds < required {
            return Some(format!(
                "seeding time {}s < required {}s",
                torrent.seeding_time_seconds, required
            ));
        }
    }

    if let Some(required) = torrent.seeding_required_ratio {
        if torrent.ratio < required {
            return Some(format!("ratio {:.2} < required {:.2}", torrent.ratio, required));
        }
    }

    None
}
