//! Input clamping
//!
//! The estimator never rejects a form value. Counts (nights, travelers)
//! and the nightly hotel budget are raised to 1; money amounts are raised
//! to 0. Every value that had to change is recorded so a caller can show
//! the user what was actually priced.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A form value the estimator replaced before pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputAdjustment {
    pub field: String,
    pub supplied: i64,
    pub applied: i64,
}

/// Clamp a count (nights, travelers) to at least 1
///
/// # Example
/// ```
/// use trip_planner_core_rs::estimator::clamp_count;
///
/// assert_eq!(clamp_count(0), 1);
/// assert_eq!(clamp_count(-3), 1);
/// assert_eq!(clamp_count(9), 9);
/// ```
pub fn clamp_count(raw: i64) -> i64 {
    raw.max(1)
}

/// Clamp a money amount to at least 0
pub fn clamp_amount(raw: i64) -> i64 {
    raw.max(0)
}

/// Parse a typed count the way the number inputs do
///
/// Leading whitespace is skipped and the longest leading integer is used
/// (`"7 nights"` → 7). Anything that does not start with a number, or
/// parses to less than 1, becomes 1.
///
/// # Example
/// ```
/// use trip_planner_core_rs::estimator::parse_count;
///
/// assert_eq!(parse_count("12"), 12);
/// assert_eq!(parse_count("3.9"), 3);
/// assert_eq!(parse_count("abc"), 1);
/// assert_eq!(parse_count("-4"), 1);
/// ```
pub fn parse_count(raw: &str) -> i64 {
    clamp_count(parse_leading_int(raw).unwrap_or(1))
}

/// Parse a typed money amount; non-numeric or negative input becomes 0
pub fn parse_amount(raw: &str) -> i64 {
    clamp_amount(parse_leading_int(raw).unwrap_or(0))
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    // Digit runs too long for i64 saturate rather than fail
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}

/// Collects adjustments while one estimate is being priced
#[derive(Debug, Default)]
pub(crate) struct Sanitizer {
    adjustments: Vec<InputAdjustment>,
}

impl Sanitizer {
    pub(crate) fn count(&mut self, field: &str, raw: i64) -> i64 {
        self.record(field, raw, clamp_count(raw))
    }

    pub(crate) fn amount(&mut self, field: &str, raw: i64) -> i64 {
        self.record(field, raw, clamp_amount(raw))
    }

    fn record(&mut self, field: &str, supplied: i64, applied: i64) -> i64 {
        if supplied != applied {
            warn!(field, supplied, applied, "clamped estimator input");
            self.adjustments.push(InputAdjustment {
                field: field.to_string(),
                supplied,
                applied,
            });
        }
        applied
    }

    pub(crate) fn finish(self) -> Vec<InputAdjustment> {
        self.adjustments
    }
}
