use std::time::Duration;

use tokio_cron_scheduler::JobScheduler;
use uuid::Uuid;

use crate::{
    config::{self, IntegrationsConfig},
    error::Error,
    model::app::AppState,
    scheduler::sync_job,
    service::settings::SettingsService,
};

/// What a settings check changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WatchOutcome {
    pub reloaded: bool,
    pub rescheduled: bool,
}

/// Tracks the interval the running sync job was scheduled with.
///
/// Integration settings are compared against the config held by the active
/// [`IntegrationsHandle`](crate::integration::IntegrationsHandle), so a manual
/// reload is not repeated here.
pub struct SettingsWatcher {
    state: AppState,
    sync_job_id: Uuid,
    interval: Duration,
}

impl SettingsWatcher {
    pub fn new(state: AppState, sync_job_id: Uuid, interval: Duration) -> Self {
        Self {
            state,
            sync_job_id,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn sync_job_id(&self) -> Uuid {
        self.sync_job_id
    }

    /// Compares the stored settings with the running ones and applies changes.
    ///
    /// A new interval replaces the sync job: the new job is added before the old
    /// one is removed. Changed integration settings rebuild the adapters and swap
    /// the active registry.
    pub async fn check(&mut self, sched: &JobScheduler) -> Result<WatchOutcome, Error> {
        let settings = SettingsService::new(&self.state.db).get_all().await?;
        let mut outcome = WatchOutcome::default();

        let interval = config::sync_interval(&settings);
        if interval != self.interval {
            let job_id = sched.add(sync_job(&self.state, interval)?).await?;
            if let Err(e) = sched.remove(&self.sync_job_id).await {
                tracing::warn!("Failed to remove previous sync job: {}", e);
            }

            tracing::info!(
                "Sync interval changed from {} to {}",
                humantime::format_duration(self.interval),
                humantime::format_duration(interval)
            );
            self.sync_job_id = job_id;
            self.interval = interval;
            outcome.rescheduled = true;
        }

        let integrations_config =
            IntegrationsConfig::from_settings(&settings, self.state.request_timeout);
        if self.state.integrations.apply(integrations_config)? {
            tracing::info!("Integration settings changed, adapters rebuilt");
            outcome.reloaded = true;
        }

        Ok(outcome)
    }
}
