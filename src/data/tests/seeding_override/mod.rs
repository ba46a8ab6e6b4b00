use super::*;
use crate::data::seeding_override::{SeedingOverrideInput, SeedingOverrideRepository};

mod create;
mod delete;
mod update;

fn override_input(tracker_name: &str, seconds: Option<i64>, ratio: Option<f64>) -> SeedingOverrideInput {
    SeedingOverrideInput {
        tracker_id: None,
        tracker_name: Some(tracker_name.to_string()),
        min_seeding_time_seconds: seconds,
        min_ratio: ratio,
    }
}
