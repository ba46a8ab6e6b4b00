//! Tracker classification and seeding requirement resolution.

use entity::sea_orm_active_enums::TrackerType;

use crate::{integration::prowlarr::Indexer, model::db::SeedingOverrideModel};

/// Name prefixes of well-known public trackers.
pub const PUBLIC_TRACKER_PREFIXES: [&str; 8] = [
    "1337x",
    "rarbg",
    "thepiratebay",
    "torrentz",
    "kickass",
    "yts",
    "eztv",
    "nyaa",
];

/// Tracker identity and requirements resolved for one torrent.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTracker {
    pub tracker_id: Option<i32>,
    pub tracker_name: Option<String>,
    pub tracker_type: TrackerType,
    pub required_seconds: Option<i64>,
    pub required_ratio: Option<f64>,
}

/// Resolves tracker metadata for a torrent's declared tracker.
///
/// A matching indexer supplies privacy and minimum requirements. Otherwise the
/// tracker is classified by the public allow-list and anything unrecognised is
/// private. A matching seeding override then replaces each requirement it sets.
///
/// # Arguments
/// - `tracker` - Tracker string as reported by the torrent client (usually an announce URL)
/// - `indexers` - Indexers fetched from Prowlarr, empty if unavailable
/// - `overrides` - Operator-configured seeding overrides
pub fn resolve_tracker(
    tracker: &str,
    indexers: &[Indexer],
    overrides: &[SeedingOverrideModel],
) -> ResolvedTracker {
    let tracker = tracker.trim();
    if tracker.is_empty() {
        return ResolvedTracker {
            tracker_id: None,
            tracker_name: None,
            tracker_type: TrackerType::Unknown,
            required_seconds: None,
            required_ratio: None,
        };
    }

    let mut resolved = match indexers.iter().find(|i| indexer_matches(i, tracker)) {
        Some(indexer) => ResolvedTracker {
            tracker_id: Some(indexer.id),
            tracker_name: Some(indexer.name.clone()),
            tracker_type: indexer.tracker_type(),
            required_seconds: indexer.min_seed_time,
            required_ratio: indexer.min_ratio,
        },
        None => ResolvedTracker {
            tracker_id: None,
            tracker_name: Some(tracker.to_string()),
            tracker_type: if is_public_tracker(tracker) {
                TrackerType::Public
            } else {
                TrackerType::Private
            },
            required_seconds: None,
            required_ratio: None,
        },
    };

    if let Some(o) = overrides.iter().find(|o| override_matches(o, &resolved)) {
        if o.min_seeding_time_seconds.is_some() {
            resolved.required_seconds = o.min_seeding_time_seconds;
        }
        if o.min_ratio.is_some() {
            resolved.required_ratio = o.min_ratio;
        }
    }

    resolved
}

/// Whether a tracker belongs to the public allow-list.
///
/// Any label of the tracker host starting with a known public name counts, so
/// both `nyaa.tracker.wf` and `tracker.nyaa.si` are public.
pub fn is_public_tracker(tracker: &str) -> bool {
    let host = tracker_host(tracker);

    host.split('.').any(|label| {
        PUBLIC_TRACKER_PREFIXES
            .iter()
            .any(|prefix| label.starts_with(prefix))
    })
}

/// Lowercased host of an announce URL, or the whole string if it is not a URL.
fn tracker_host(tracker: &str) -> String {
    let lower = tracker.trim().to_lowercase();
    let without_scheme = lower
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(&lower);
    let host = without_scheme
        .split(['/', '?'])
        .next()
        .unwrap_or_default();
    let host = host.rsplit('@').next().unwrap_or(host);

    host.split(':').next().unwrap_or(host).to_string()
}

fn indexer_matches(indexer: &Indexer, tracker: &str) -> bool {
    if indexer.name.eq_ignore_ascii_case(tracker) {
        return true;
    }

    let name: String = indexer
        .name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if name.len() < 3 {
        return false;
    }

    tracker_host(tracker).split('.').any(|label| label == name)
}

fn override_matches(o: &SeedingOverrideModel, resolved: &ResolvedTracker) -> bool {
    if let (Some(override_id), Some(tracker_id)) = (o.tracker_id, resolved.tracker_id) {
        if override_id == tracker_id {
            return true;
        }
    }

    match (o.tracker_name.as_deref(), resolved.tracker_name.as_deref()) {
        (Some(a), Some(b)) => !a.trim().is_empty() && a.trim().eq_ignore_ascii_case(b.trim()),
        _ => false,
    }
}
