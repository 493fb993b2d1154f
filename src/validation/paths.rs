//! Path name validation
//!
//! A path name is valid when it contains none of the characters the target
//! filesystem forbids in file names. The forbidden set differs between
//! platforms, so it is supplied by an [`IllegalCharProvider`] instead of being
//! fixed here. The free functions use the host platform's set.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::HelperError;

/// Prefix marking an application-relative ("virtual") path
pub const VIRTUAL_PATH_PREFIX: &str = "~/";

/// Source of the characters that may not appear in a file name
pub trait IllegalCharProvider {
    fn is_illegal(&self, c: char) -> bool;
}

impl<F> IllegalCharProvider for F
where
    F: Fn(char) -> bool,
{
    fn is_illegal(&self, c: char) -> bool {
        self(c)
    }
}

/// Built-in illegal character sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathRules {
    /// Whatever the platform this binary was built for forbids
    #[default]
    Host,
    /// Windows file name rules
    Windows,
    /// Unix file name rules
    Unix,
}

impl PathRules {
    pub fn illegal_chars(&self) -> IllegalChars {
        match self {
            PathRules::Host => IllegalChars::host(),
            PathRules::Windows => IllegalChars::windows(),
            PathRules::Unix => IllegalChars::unix(),
        }
    }
}

impl FromStr for PathRules {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "host" => Ok(PathRules::Host),
            "windows" => Ok(PathRules::Windows),
            "unix" => Ok(PathRules::Unix),
            other => Err(HelperError::InvalidArgument(format!(
                "unknown path rules '{}' (expected host, windows or unix)",
                other
            ))),
        }
    }
}

/// A fixed set of characters forbidden in file names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IllegalChars {
    chars: BTreeSet<char>,
}

impl IllegalChars {
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// `"`, `<`, `>`, `|`, `:`, `*`, `?`, `\`, `/` and the control
    /// characters U+0000 through U+001F
    pub fn windows() -> Self {
        let controls = (0u8..32).map(char::from);
        Self::from_chars(
            ['"', '<', '>', '|', ':', '*', '?', '\\', '/']
                .into_iter()
                .chain(controls),
        )
    }

    /// NUL and `/`
    pub fn unix() -> Self {
        Self::from_chars(['\0', '/'])
    }

    #[cfg(windows)]
    pub fn host() -> Self {
        Self::windows()
    }

    #[cfg(not(windows))]
    pub fn host() -> Self {
        Self::unix()
    }

    /// Extend the set with additional characters
    pub fn with_extra<I: IntoIterator<Item = char>>(mut self, extra: I) -> Self {
        self.chars.extend(extra);
        self
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl IllegalCharProvider for IllegalChars {
    fn is_illegal(&self, c: char) -> bool {
        self.contains(c)
    }
}

/// Validates path names against an illegal character provider
#[derive(Debug, Clone)]
pub struct PathValidator<P: IllegalCharProvider = IllegalChars> {
    provider: P,
}

impl PathValidator<IllegalChars> {
    /// Validator using the host platform's rules
    pub fn host() -> Self {
        Self::new(IllegalChars::host())
    }
}

impl Default for PathValidator<IllegalChars> {
    fn default() -> Self {
        Self::host()
    }
}

impl<P: IllegalCharProvider> PathValidator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// True when `expression` contains no illegal character
    pub fn is_valid_path_name(&self, expression: &str) -> bool {
        match expression.chars().find(|&c| self.provider.is_illegal(c)) {
            Some(c) => {
                debug!(expression, illegal = ?c, "Rejected path name");
                false
            }
            None => true,
        }
    }

    /// True when `expression` starts with `~/` and the remainder is a valid
    /// path name
    pub fn is_valid_virtual_path_name(&self, expression: &str) -> bool {
        match expression.strip_prefix(VIRTUAL_PATH_PREFIX) {
            Some(rest) => self.is_valid_path_name(rest),
            None => {
                debug!(expression, "Rejected virtual path without ~/ prefix");
                false
            }
        }
    }
}

/// Check `expression` against the host platform's illegal file name characters
///
/// # Examples
/// ```
/// use image_helpers::validation::paths::is_valid_path_name;
///
/// assert!(is_valid_path_name("foo_bar"));
/// assert!(!is_valid_path_name("foo\0bar"));
/// ```
pub fn is_valid_path_name(expression: &str) -> bool {
    PathValidator::host().is_valid_path_name(expression)
}

/// Check that `expression` is `~/` followed by a valid host path name
///
/// # Examples
/// ```
/// use image_helpers::validation::paths::is_valid_virtual_path_name;
///
/// assert!(is_valid_virtual_path_name("~/foo.png"));
/// assert!(!is_valid_virtual_path_name("foo.png"));
/// ```
pub fn is_valid_virtual_path_name(expression: &str) -> bool {
    PathValidator::host().is_valid_virtual_path_name(expression)
}
