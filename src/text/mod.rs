//! Text helpers shared by the extraction and validation operations.

pub mod numbers;

pub use numbers::extract_positive_integers;

use crate::errors::{HelperError, HelperResult};

/// Unwrap optional input text, rejecting absent values
///
/// `&str` can never be null, so callers holding an `Option` (CLI arguments,
/// deserialised requests) go through this check first.
///
/// # Examples
/// ```
/// use image_helpers::text::require_text;
///
/// assert_eq!(require_text(Some("~/a.png")).unwrap(), "~/a.png");
/// assert!(require_text(None).is_err());
/// ```
pub fn require_text(expression: Option<&str>) -> HelperResult<&str> {
    expression.ok_or_else(|| HelperError::InvalidArgument("expression is required".to_string()))
}
