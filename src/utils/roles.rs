use crate::utils::duration::parse_duration_to_seconds;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// One role the player has spent time on, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: String,
    /// Canonical "HH:MM:SS" duration string.
    pub time_spent: String,
}

/// Strips the tracker naming prefix from a role label.
///
/// Trackers are stored as `JobDoctor`, `JobChief`, etc.; labels without
/// the prefix (like `Overall`) pass through unchanged.
pub fn strip_role_prefix(label: &str) -> &str {
    label.strip_prefix("Job").unwrap_or(label)
}

/// Sorts role entries by time spent, descending.
///
/// The sort is stable, so entries with equal durations keep their input
/// order, though callers should not rely on that.
pub fn sort_by_time_desc(entries: &mut [RoleEntry]) {
    entries.sort_by_key(|entry| Reverse(parse_duration_to_seconds(&entry.time_spent)));
}
