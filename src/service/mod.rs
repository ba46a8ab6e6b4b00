//! Business logic layer.
//!
//! Services borrow the database connection and an integrations snapshot for
//! the duration of one operation and compose the repositories in `data`.

pub mod deletion;
pub mod eligibility;
pub mod settings;
pub mod sync;
