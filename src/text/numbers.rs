//! Positive integer extraction
//!
//! Pulls every run of ASCII digits out of free-form text, e.g. the width and
//! height embedded in `"resize 640x480"`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::errors::{HelperError, HelperResult};

lazy_static! {
    /// A maximal run of ASCII decimal digits. `\d` would also match other
    /// Unicode digit scripts.
    ///
    /// Compiled once and shared by every call rather than built per call.
    /// A compiled `Regex` is immutable and `Sync`, so callers share no
    /// mutable state through it.
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Extract every positive integer from `expression`, left to right
///
/// Signs are never part of a match, so `"-5"` yields `5`. Zero and leading
/// zeros are accepted (`"007"` yields `7`).
///
/// # Errors
/// - [`HelperError::PreconditionViolation`] when `expression` is empty or
///   whitespace only
/// - [`HelperError::Overflow`] when a digit run exceeds `i32::MAX`
///
/// # Examples
/// ```
/// use image_helpers::text::numbers::extract_positive_integers;
///
/// assert_eq!(extract_positive_integers("abc 12 def 345").unwrap(), vec![12, 345]);
/// assert!(extract_positive_integers("no digits here").unwrap().is_empty());
/// assert!(extract_positive_integers("   ").is_err());
/// ```
pub fn extract_positive_integers(expression: &str) -> HelperResult<Vec<i32>> {
    if expression.trim().is_empty() {
        return Err(HelperError::PreconditionViolation(
            "expression must contain at least one non-whitespace character".to_string(),
        ));
    }

    DIGIT_RUN
        .find_iter(expression)
        .map(|m| parse_digit_run(m.as_str()))
        .collect()
}

fn parse_digit_run(digits: &str) -> HelperResult<i32> {
    // Runs are digits only, so overflow is the only way parsing can fail
    digits.parse::<i32>().map_err(|_| {
        debug!(digits, "Digit run exceeds integer range");
        HelperError::Overflow {
            digits: digits.to_string(),
        }
    })
}
