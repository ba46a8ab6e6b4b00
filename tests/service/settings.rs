//! Tests for SettingsService.

use std::{sync::Arc, time::Duration};

use removarr::{
    config::{IntegrationsConfig, QBittorrentConfig, ServiceConfig, DEFAULT_SYNC_INTERVAL},
    data::seeding_override::SeedingOverrideInput,
    error::{config::ConfigError, Error},
    integration::{IntegrationsHandle, Service},
    service::settings::SettingsService,
};
use removarr_test_utils::prelude::*;

use crate::setup::TEST_REQUEST_TIMEOUT;

fn disabled_handle() -> IntegrationsHandle {
    IntegrationsHandle::from_config(IntegrationsConfig {
        request_timeout: TEST_REQUEST_TIMEOUT,
        ..Default::default()
    })
    .unwrap()
}

/// Expect a reload to swap the registry while earlier snapshots stay untouched
#[tokio::test]
async fn reload_swaps_registry() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let handle = disabled_handle();
    let before = handle.snapshot();

    test.remote().insert_integration_settings("sonarr").await?;
    let config = SettingsService::new(&test.db)
        .reload(&handle, TEST_REQUEST_TIMEOUT)
        .await
        .unwrap();

    let after = handle.snapshot();

    assert_eq!(config.sonarr.unwrap().url, test.server_url());
    assert!(config.radarr.is_none());
    assert!(!before.sonarr.is_enabled());
    assert!(after.sonarr.is_enabled());
    assert!(!after.radarr.is_enabled());

    Ok(())
}

/// Expect a second reload of unchanged settings to keep the active adapters
#[tokio::test]
async fn reload_unchanged_settings_keeps_registry() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_media_tables().build().await?;
    let handle = disabled_handle();

    test.remote().insert_integration_settings("sonarr").await?;
    let settings = SettingsService::new(&test.db);
    let first = settings.reload(&handle, TEST_REQUEST_TIMEOUT).await.unwrap();
    let active = handle.snapshot();
    let second = settings.reload(&handle, TEST_REQUEST_TIMEOUT).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(handle.config(), second);
    assert!(Arc::ptr_eq(&active, &handle.snapshot()));

    Ok(())
}

/// Expect a rejected API key to surface the HTTP status while a valid one passes
#[tokio::test]
async fn test_integration_reports_rejected_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_media_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/v3/series")
                .with_status(401)
                .with_body("Unauthorized")
                .expect(1)
                .create()
        })
        .with_movie_endpoint(vec![], 1)
        .build()
        .await?;
    let service = ServiceConfig {
        url: test.server_url(),
        api_key: "wrong-key".to_string(),
    };
    let config = IntegrationsConfig {
        sonarr: Some(service.clone()),
        radarr: Some(service),
        request_timeout: TEST_REQUEST_TIMEOUT,
        ..Default::default()
    };
    let settings = SettingsService::new(&test.db);

    let rejected = settings.test_integration(Service::Sonarr, &config).await;
    let accepted = settings.test_integration(Service::Radarr, &config).await;

    let Err(Error::IntegrationError(e)) = rejected else {
        panic!("expected IntegrationError, got {:?}", rejected);
    };
    assert_eq!(e.status(), Some(401));
    assert!(accepted.is_ok());

    test.assert_mocks();

    Ok(())
}

/// Expect unconfigured services and blank credentials to fail without a request
#[tokio::test]
async fn test_integration_requires_configuration() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;
    let config = IntegrationsConfig {
        qbittorrent: Some(QBittorrentConfig {
            url: test.server_url(),
            username: "admin".to_string(),
            password: " ".to_string(),
        }),
        request_timeout: TEST_REQUEST_TIMEOUT,
        ..Default::default()
    };
    let settings = SettingsService::new(&test.db);

    let disabled = settings.test_integration(Service::Prowlarr, &config).await;
    let blank = settings.test_integration(Service::QBittorrent, &config).await;

    assert!(matches!(
        disabled,
        Err(Error::ConfigError(ConfigError::IntegrationDisabled(Service::Prowlarr)))
    ));
    assert!(matches!(
        blank,
        Err(Error::ConfigError(ConfigError::MissingCredentials(Service::QBittorrent)))
    ));

    Ok(())
}

/// Expect the stored sync frequency to be parsed, with a fallback for junk values
#[tokio::test]
async fn sync_interval_from_settings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_media_tables()
        .with_setting("sync_frequency", "15m")
        .build()
        .await?;
    let settings = SettingsService::new(&test.db);

    assert_eq!(settings.sync_interval().await.unwrap(), Duration::from_secs(15 * 60));

    settings.set("sync_frequency", "every now and then").await.unwrap();

    assert_eq!(settings.sync_interval().await.unwrap(), DEFAULT_SYNC_INTERVAL);

    Ok(())
}

/// Expect invalid overrides to be rejected before anything is stored
#[tokio::test]
async fn rejects_invalid_overrides() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;
    let settings = SettingsService::new(&test.db);

    let anonymous = settings
        .create_override(SeedingOverrideInput {
            tracker_id: None,
            tracker_name: Some("  ".to_string()),
            min_seeding_time_seconds: Some(3600),
            min_ratio: None,
        })
        .await;
    let negative = settings
        .create_override(SeedingOverrideInput {
            tracker_id: Some(3),
            tracker_name: None,
            min_seeding_time_seconds: None,
            min_ratio: Some(-1.0),
        })
        .await;

    assert!(matches!(anonymous, Err(Error::InvalidOverride(_))));
    assert!(matches!(negative, Err(Error::InvalidOverride(_))));
    assert!(settings.list_overrides().await.unwrap().is_empty());

    Ok(())
}

/// Expect a valid override to be listed, updated and deleted
#[tokio::test]
async fn override_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_media_tables().build().await?;
    let settings = SettingsService::new(&test.db);

    let created = settings
        .create_override(SeedingOverrideInput {
            tracker_id: None,
            tracker_name: Some("PrivateHD".to_string()),
            min_seeding_time_seconds: Some(432000),
            min_ratio: None,
        })
        .await
        .unwrap();

    let updated = settings
        .update_override(
            created.id,
            SeedingOverrideInput {
                tracker_id: None,
                tracker_name: Some("PrivateHD".to_string()),
                min_seeding_time_seconds: Some(86400),
                min_ratio: Some(1.0),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.min_seeding_time_seconds, Some(86400));
    assert_eq!(updated.min_ratio, Some(1.0));
    assert_eq!(settings.list_overrides().await.unwrap().len(), 1);

    assert!(settings.delete_override(created.id).await.unwrap());
    assert!(settings.list_overrides().await.unwrap().is_empty());

    Ok(())
}
