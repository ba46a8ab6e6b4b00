use thiserror::Error;

use crate::integration::Service;

/// Failure talking to an external service.
///
/// Every variant carries the service and the operation that was attempted so the
/// message reads on its own once it reaches a log line or an audit record.
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// The service answered with a non-success status.
    #[error("{service} {operation} failed with status {status}: {body}")]
    Status {
        service: Service,
        operation: &'static str,
        status: u16,
        body: String,
    },
    /// Network failure, timeout or connection refusal.
    #[error("{service} {operation} request failed: {source}")]
    Transport {
        service: Service,
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The response body did not match the expected shape.
    #[error("{service} {operation} returned an unreadable response: {source}")]
    Decode {
        service: Service,
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// Session login was rejected.
    #[error("{service} login failed: {reason}")]
    Login { service: Service, reason: String },
}

impl IntegrationError {
    pub(crate) fn from_reqwest(
        service: Service,
        operation: &'static str,
        source: reqwest::Error,
    ) -> Self {
        if source.is_decode() {
            Self::Decode {
                service,
                operation,
                source,
            }
        } else {
            Self::Transport {
                service,
                operation,
                source,
            }
        }
    }

    /// HTTP status of the failed call, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
