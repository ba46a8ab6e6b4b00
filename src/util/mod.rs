//! Utility helpers shared by services and the scheduler.
//!
//! - `time` - timestamp parsing for the formats the external services use
//! - `gate` - the shared store gate serializing deletions against sync passes

pub mod gate;
pub mod time;
