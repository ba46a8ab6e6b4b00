//! Seedbox media cleanup.
//!
//! Keeps a local store in agreement with the media managers, request manager,
//! indexer manager and torrent client, decides whether each media item may be
//! removed without breaking tracker seeding rules, and tears it down across
//! every system when asked to.

pub mod config;
pub mod data;
pub mod error;
pub mod integration;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
