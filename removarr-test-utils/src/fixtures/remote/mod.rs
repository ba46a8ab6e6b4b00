//! Fixtures for the external services.
//!
//! Every service is mocked on the same server. Settings written by
//! [`RemoteFixtures::insert_integration_settings`] point the matching
//! integration at it.

pub mod mockito;
pub mod payload;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};

use crate::{
    constant::{KEYED_SERVICES, TEST_API_KEY, TEST_QBITTORRENT_PASSWORD, TEST_QBITTORRENT_USERNAME},
    TestContext,
};

impl TestContext {
    pub fn remote<'a>(&'a mut self) -> RemoteFixtures<'a> {
        RemoteFixtures { setup: self }
    }
}

pub struct RemoteFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> RemoteFixtures<'a> {
    /// Persist settings that enable a service against the mock server.
    ///
    /// # Arguments
    /// - `service` - `sonarr`, `radarr`, `overseerr`, `prowlarr` or `qbittorrent`
    pub async fn insert_integration_settings(&self, service: &str) -> Result<(), DbErr> {
        let url = self.setup.server_url();

        let mut settings = vec![
            (format!("{service}.enabled"), "true".to_string()),
            (format!("{service}.url"), url),
        ];
        if KEYED_SERVICES.contains(&service) {
            settings.push((format!("{service}.api_key"), TEST_API_KEY.to_string()));
        } else {
            settings.push((
                format!("{service}.username"),
                TEST_QBITTORRENT_USERNAME.to_string(),
            ));
            settings.push((
                format!("{service}.password"),
                TEST_QBITTORRENT_PASSWORD.to_string(),
            ));
        }

        for (key, value) in settings {
            entity::setting::ActiveModel {
                key: ActiveValue::Set(key),
                value: ActiveValue::Set(value),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            }
            .insert(&self.setup.db)
            .await?;
        }

        Ok(())
    }
}
