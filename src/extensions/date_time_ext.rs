use crate::certificate::parse_timestamp;
use chrono::{DateTime, Utc};

pub trait DisplayDate {
    /// e.g. `Jan 5, 2024, 09:30 AM`
    fn short_display(&self) -> String;

    /// e.g. `January 5, 2024 at 09:30 AM UTC`
    fn long_display(&self) -> String;
}

impl DisplayDate for DateTime<Utc> {
    fn short_display(&self) -> String {
        self.format("%b %-d, %Y, %I:%M %p").to_string()
    }

    fn long_display(&self) -> String {
        self.format("%B %-d, %Y at %I:%M %p UTC").to_string()
    }
}

/// Formats a raw API timestamp, leaving it untouched when it cannot be parsed.
pub fn format_short(raw: &str) -> String {
    parse_timestamp(raw).map(|t| t.short_display()).unwrap_or_else(|| raw.to_string())
}

pub fn format_long(raw: &str) -> String {
    parse_timestamp(raw).map(|t| t.long_display()).unwrap_or_else(|| raw.to_string())
}
