//! Error types for removarr.
//!
//! Domain errors live in their own submodules and convert into the root
//! [`Error`] through `#[from]`, so service code can propagate with `?`.

pub mod config;
pub mod deletion;
pub mod integration;

use thiserror::Error;

use crate::error::{config::ConfigError, deletion::DeletionStepError, integration::IntegrationError};

/// Main error type for the application.
///
/// # Error Categories
/// - Configuration errors (environment, disabled integrations)
/// - Integration errors (HTTP status, transport, decoding, login)
/// - Local store errors (database faults, missing rows)
/// - Deletion outcomes that completed locally but failed downstream
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables, disabled integration).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// External service call failed.
    #[error(transparent)]
    IntegrationError(#[from] IntegrationError),
    /// No media item row exists for the requested ID.
    #[error("media item not found: {0}")]
    MediaItemNotFound(i32),
    /// The media item was removed locally but one or more downstream steps failed.
    ///
    /// This is not a rollback signal: the local row and its dependents are already gone.
    #[error(
        "deletion of '{title}' (media item {media_item_id}) completed with errors: [{}]",
        join_failures(.failures)
    )]
    DeletionIncomplete {
        media_item_id: i32,
        title: String,
        failures: Vec<DeletionStepError>,
    },
    /// A seeding override was rejected before being stored.
    #[error("invalid seeding override: {0}")]
    InvalidOverride(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

fn join_failures(failures: &[DeletionStepError]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
