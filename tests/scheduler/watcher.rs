//! Tests for SettingsWatcher::check.

use std::{sync::Arc, time::Duration};

use removarr::{
    config::DEFAULT_SYNC_INTERVAL,
    scheduler::{SettingsWatcher, WatchOutcome},
    service::settings::SettingsService,
};
use removarr_test_utils::prelude::*;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::setup::{app_state, TEST_REQUEST_TIMEOUT};

async fn placeholder_job(sched: &JobScheduler) -> uuid::Uuid {
    let job = Job::new_repeated_async(Duration::from_secs(3600), |_, _| Box::pin(async {}))
        .expect("Failed to build job");

    sched.add(job).await.expect("Failed to add job")
}

/// Expect unchanged settings to leave both the job and the adapters alone
#[tokio::test(flavor = "multi_thread")]
async fn unchanged_settings_are_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;
    let state = app_state(&test).await;
    let sched = JobScheduler::new().await.expect("Failed to create scheduler");
    let job_id = placeholder_job(&sched).await;

    let mut watcher = SettingsWatcher::new(state, job_id, DEFAULT_SYNC_INTERVAL);
    let outcome = watcher.check(&sched).await.unwrap();

    assert_eq!(outcome, WatchOutcome::default());
    assert_eq!(watcher.sync_job_id(), job_id);
    assert_eq!(watcher.interval(), DEFAULT_SYNC_INTERVAL);

    Ok(())
}

/// Expect a new interval to replace the sync job and new credentials to rebuild adapters
#[tokio::test(flavor = "multi_thread")]
async fn applies_changed_settings() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let state = app_state(&test).await;
    let sched = JobScheduler::new().await.expect("Failed to create scheduler");
    let job_id = placeholder_job(&sched).await;

    let mut watcher = SettingsWatcher::new(state.clone(), job_id, DEFAULT_SYNC_INTERVAL);

    test.media().insert_setting("sync_frequency", "10m").await?;
    test.remote().insert_integration_settings("sonarr").await?;

    let outcome = watcher.check(&sched).await.unwrap();

    assert!(outcome.rescheduled);
    assert!(outcome.reloaded);
    assert_ne!(watcher.sync_job_id(), job_id);
    assert_eq!(watcher.interval(), Duration::from_secs(10 * 60));
    assert!(state.integrations.snapshot().sonarr.is_enabled());

    let again = watcher.check(&sched).await.unwrap();
    assert_eq!(again, WatchOutcome::default());

    Ok(())
}

/// Expect settings already applied by a manual reload not to be rebuilt again
#[tokio::test(flavor = "multi_thread")]
async fn manual_reload_is_not_repeated() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let state = app_state(&test).await;
    let sched = JobScheduler::new().await.expect("Failed to create scheduler");
    let job_id = placeholder_job(&sched).await;
    let mut watcher = SettingsWatcher::new(state.clone(), job_id, DEFAULT_SYNC_INTERVAL);

    test.remote().insert_integration_settings("radarr").await?;
    SettingsService::new(&test.db)
        .reload(&state.integrations, TEST_REQUEST_TIMEOUT)
        .await
        .unwrap();
    let reloaded = state.integrations.snapshot();

    let outcome = watcher.check(&sched).await.unwrap();

    assert!(!outcome.reloaded);
    assert!(reloaded.radarr.is_enabled());
    assert!(Arc::ptr_eq(&reloaded, &state.integrations.snapshot()));

    Ok(())
}
