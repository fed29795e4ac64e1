//! Field validators.
//!
//! Pure checks over raw strings, run before anything touches the store.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::codec::{COURSE_DELIMITER, FIELD_DELIMITER};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-([0-9]{2})-[0-9]{2}$").expect("static regex: registration date")
});

/// Non-empty and made only of ASCII decimal digits.
pub fn is_numeric_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `YYYY-MM-DD` with a month between 01 and 12.
///
/// The day is only checked for width; `2024-02-31` passes.
pub fn is_valid_date(s: &str) -> bool {
    let Some(caps) = DATE_PATTERN.captures(s) else {
        return false;
    };
    caps[1]
        .parse::<u8>()
        .map(|month| (1..=12).contains(&month))
        .unwrap_or(false)
}

/// True when `s` can be stored without breaking the line format.
pub fn is_clean_field(s: &str) -> bool {
    !s.contains([FIELD_DELIMITER, COURSE_DELIMITER, '\n', '\r'])
}
