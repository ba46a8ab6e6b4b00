//! Application models and type definitions.
//!
//! Database model aliases, the shared application state, and the value types
//! returned by the sync, eligibility and deletion services.

pub mod app;
pub mod db;
pub mod deletion;
pub mod eligibility;
pub mod sync;
