//! Validation helpers for contact and schedule data.

use once_cell::sync::Lazy;
use regex::Regex;

/// Format used when rendering schedule timings.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

static SCHEDULE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("schedule name pattern is valid"));

/// Validate that a schedule name is non-empty alphanumeric.
pub fn validate_schedule_name(name: &str) -> bool {
    SCHEDULE_NAME_RE.is_match(name)
}

/// Validate that a required person field carries visible content.
pub fn validate_required_field(value: &str) -> bool {
    !value.trim().is_empty()
}
