use thiserror::Error;

use crate::{error::integration::IntegrationError, integration::Service};

/// One failed step of a media item teardown.
///
/// Steps are independent: a failure is recorded here and the teardown moves on.
#[derive(Error, Debug)]
pub enum DeletionStepError {
    #[error("failed to delete files at {path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to delete/unmonitor from {service}: delete: {delete}; unmonitor: {unmonitor}")]
    MediaManager {
        service: Service,
        delete: IntegrationError,
        unmonitor: IntegrationError,
    },
    #[error("failed to delete request {request_id} from {service}: {source}")]
    Request {
        service: Service,
        request_id: i32,
        #[source]
        source: IntegrationError,
    },
    #[error("failed to look up torrents for the media item: {0}")]
    TorrentLookup(#[source] sea_orm::DbErr),
    #[error("failed to delete torrent {hash}: {source}")]
    Torrent {
        hash: String,
        #[source]
        source: IntegrationError,
    },
}
