//! Database repositories.
//!
//! Each repository wraps a borrowed connection (or transaction) and owns the
//! queries for one table. Services compose them; nothing else touches the
//! entities directly.

pub mod audit_log;
pub mod media_item;
pub mod seeding_override;
pub mod setting;
pub mod torrent;
