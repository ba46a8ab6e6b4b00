//! Sync pass results.

use crate::integration::Service;

/// Outcome of one sync stage that did not abort the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    pub service: Service,
    pub message: String,
}

/// Aggregate result of a sync pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub series: usize,
    pub movies: usize,
    pub requests_linked: usize,
    /// `None` when the torrent pass was skipped or failed.
    pub torrents: Option<TorrentSyncSummary>,
    pub failures: Vec<StageFailure>,
}

/// Result of a torrent sync pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentSyncSummary {
    pub synced: usize,
    pub linked: usize,
    pub unlinked: usize,
}
