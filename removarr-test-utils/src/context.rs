//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The
//! context holds an in-memory SQLite database and a mock HTTP server that
//! stands in for every external service.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// Sonarr, Radarr, Overseerr, Prowlarr and qBittorrent all point at the same
/// mock server; their API paths do not overlap.
///
/// Mocks registered through the builder are checked by [`assert_mocks`](Self::assert_mocks);
/// mocks created afterwards are asserted individually.
///
/// ```no_run
/// use removarr_test_utils::prelude::*;
///
/// async fn example() -> Result<(), TestError> {
///     let mut test = TestBuilder::new().with_media_tables().build().await?;
///
///     test.media().insert_movie(1, 603, "The Matrix", None).await?;
///     let movies = test
///         .remote()
///         .create_movie_endpoint(vec![payload::movie(1, 603, "The Matrix", None)], 1);
///
///     movies.assert();
///     test.assert_mocks();
///
///     Ok(())
/// }
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for every integration
    pub server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty database and a fresh mock server.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, without a trailing slash.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
