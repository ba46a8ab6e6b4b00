//! Periodic background work.
//!
//! A repeated job runs a full sync at the persisted interval. A second job
//! watches the settings and swaps in a new sync job when the interval changes.

pub mod config;
mod watcher;

use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::{model::app::AppState, service::sync::SyncService};

pub use watcher::{SettingsWatcher, WatchOutcome};

/// Initialize and start the job scheduler
///
/// # Arguments
/// - `state` - Shared application state used by every job
/// - `interval` - Initial sync interval
///
/// # Returns
/// The running scheduler, to be shut down by the caller
pub async fn start_scheduler(
    state: &AppState,
    interval: Duration,
) -> Result<JobScheduler, JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    let sync_job_id = sched.add(sync_job(state, interval)?).await?;
    tracing::info!(
        "Scheduled sync every {}",
        humantime::format_duration(interval)
    );

    let watcher = Arc::new(Mutex::new(SettingsWatcher::new(
        state.clone(),
        sync_job_id,
        interval,
    )));

    sched
        .add(Job::new_repeated_async(
            config::SETTINGS_CHECK_INTERVAL,
            move |_, sched| {
                let watcher = Arc::clone(&watcher);

                Box::pin(async move {
                    let mut watcher = watcher.lock().await;
                    if let Err(e) = watcher.check(&sched).await {
                        tracing::error!("Error checking settings: {}", e);
                    }
                })
            },
        )?)
        .await?;

    sched.start().await?;

    Ok(sched)
}

/// Repeated job running a full sync.
pub(crate) fn sync_job(state: &AppState, interval: Duration) -> Result<Job, JobSchedulerError> {
    let state = state.clone();

    Job::new_repeated_async(interval, move |_, _| {
        let state = state.clone();

        Box::pin(async move {
            SyncService::run(&state).await;
        })
    })
}
