//! Declarative test builder.
//!
//! The `TestBuilder` collects tables, persisted settings and mock endpoints,
//! then creates all of them in `build()`.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_media_tables: bool,

    // Database fixtures to insert
    integrations: Vec<&'static str>,
    settings: Vec<(String, String)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    series_endpoints: Vec<(Vec<Value>, usize)>,
    movie_endpoints: Vec<(Vec<Value>, usize)>,
    request_endpoints: Vec<(Vec<Value>, usize)>,
    indexer_endpoints: Vec<(Vec<Value>, usize)>,
    torrent_endpoints: Vec<(Vec<Value>, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_media_tables: false,
            integrations: Vec::new(),
            settings: Vec::new(),
            mock_builders: Vec::new(),
            series_endpoints: Vec::new(),
            movie_endpoints: Vec::new(),
            request_endpoints: Vec::new(),
            indexer_endpoints: Vec::new(),
            torrent_endpoints: Vec::new(),
        }
    }

    /// Add every removarr table to the test database.
    ///
    /// Tables are created parent first so foreign keys (and their cascades)
    /// are in place.
    pub fn with_media_tables(mut self) -> Self {
        self.include_media_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use removarr_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), removarr_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Setting)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Enable a service in the persisted settings, pointed at the mock server.
    ///
    /// # Arguments
    /// - `service` - `sonarr`, `radarr`, `overseerr`, `prowlarr` or `qbittorrent`
    pub fn with_integration(mut self, service: &'static str) -> Self {
        self.integrations.push(service);
        self
    }

    /// Persist an arbitrary setting.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.push((key.into(), value.into()));
        self
    }

    /// Add `GET /api/v3/series` returning `series`, expected `expected_requests` times.
    pub fn with_series_endpoint(mut self, series: Vec<Value>, expected_requests: usize) -> Self {
        self.series_endpoints.push((series, expected_requests));
        self
    }

    /// Add `GET /api/v3/movie` returning `movies`, expected `expected_requests` times.
    pub fn with_movie_endpoint(mut self, movies: Vec<Value>, expected_requests: usize) -> Self {
        self.movie_endpoints.push((movies, expected_requests));
        self
    }

    /// Add `GET /api/v1/request` returning `requests`, expected `expected_requests` times.
    pub fn with_request_endpoint(mut self, requests: Vec<Value>, expected_requests: usize) -> Self {
        self.request_endpoints.push((requests, expected_requests));
        self
    }

    /// Add `GET /api/v1/indexer` returning `indexers`, expected `expected_requests` times.
    pub fn with_indexer_endpoint(mut self, indexers: Vec<Value>, expected_requests: usize) -> Self {
        self.indexer_endpoints.push((indexers, expected_requests));
        self
    }

    /// Add qBittorrent login plus `GET /api/v2/torrents/info` returning `torrents`.
    pub fn with_torrent_endpoint(mut self, torrents: Vec<Value>, expected_requests: usize) -> Self {
        self.torrent_endpoints.push((torrents, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (media tables if specified, then custom tables)
    /// 2. Inserts persisted settings (integrations, then custom settings)
    /// 3. Creates mock HTTP endpoints (custom endpoints, then shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_media_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::MediaItem),
                schema.create_table_from_entity(entity::prelude::Torrent),
                schema.create_table_from_entity(entity::prelude::WatchHistory),
                schema.create_table_from_entity(entity::prelude::AuditLog),
                schema.create_table_from_entity(entity::prelude::SeedingOverride),
                schema.create_table_from_entity(entity::prelude::Setting),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert settings
        for service in self.integrations {
            setup.remote().insert_integration_settings(service).await?;
        }

        for (key, value) in self.settings {
            setup.media().insert_setting(&key, &value).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can queue an error response
        // ahead of a shortcut for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (series, expected) in self.series_endpoints {
            mocks.push(setup.remote().create_series_endpoint(series, expected));
        }

        for (movies, expected) in self.movie_endpoints {
            mocks.push(setup.remote().create_movie_endpoint(movies, expected));
        }

        for (requests, expected) in self.request_endpoints {
            mocks.push(setup.remote().create_request_endpoint(requests, expected));
        }

        for (indexers, expected) in self.indexer_endpoints {
            mocks.push(setup.remote().create_indexer_endpoint(indexers, expected));
        }

        for (torrents, expected) in self.torrent_endpoints {
            mocks.push(setup.remote().create_qbittorrent_login_endpoint());
            mocks.push(setup.remote().create_torrent_endpoint(torrents, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks.extend(mocks);

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
