//! Test fixtures for database rows and mock HTTP endpoints.
//!
//! - `media` - Media items, torrents, seeding overrides and settings
//! - `remote` - JSON payloads and mock endpoints for the external services

pub mod media;
pub mod remote;
