use serde::{Deserialize, Serialize};

/// A raw time-spent value as it arrives from the database driver.
///
/// SQL `interval` columns reach us either as broken-down components or,
/// for text-typed trackers, as a free-form string like `"12:30:45.123"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawDuration {
    Components {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Text(String),
}

/// Renders a raw duration as a canonical `"HH:MM:SS"` string.
///
/// Days are folded into the hours field, so hours may exceed two digits.
/// Total function: anything missing or unrecognized degrades to
/// `"00:00:00"` rather than failing.
pub fn format_duration(raw: Option<&RawDuration>) -> String {
    match raw {
        Some(RawDuration::Components {
            days,
            hours,
            minutes,
            seconds,
        }) => {
            let total_hours = hours + days * 24;
            format!("{total_hours:02}:{minutes:02}:{seconds:02}")
        }
        Some(RawDuration::Text(text)) => match text.split_once('.') {
            // Drop sub-second precision
            Some((head, _)) => head.to_string(),
            None => text.clone(),
        },
        None => "00:00:00".to_string(),
    }
}

/// Parses a canonical `"HH:MM:SS"` string into total seconds.
///
/// Components that fail to parse count as 0; anything not shaped as three
/// colon-separated fields yields 0.
pub fn parse_duration_to_seconds(text: &str) -> i64 {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return 0;
    }

    let hours: i64 = parts[0].parse().unwrap_or(0);
    let minutes: i64 = parts[1].parse().unwrap_or(0);
    let seconds: i64 = parts[2].parse().unwrap_or(0);

    hours * 3600 + minutes * 60 + seconds
}
