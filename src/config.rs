use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::crypto::fingerprint::{EncodingPolicy, Fingerprinter};
use crate::validation::paths::{PathRules, PathValidator};

/// Base name of the optional configuration file (`image-helpers.toml`)
pub const CONFIG_FILE_NAME: &str = "image-helpers";

/// Prefix for environment overrides, e.g. `IMAGE_HELPERS__PATHS__RULES=windows`
pub const ENV_PREFIX: &str = "IMAGE_HELPERS";

/// Application configuration loaded from image-helpers.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub fingerprint: FingerprintConfig,
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintConfig {
    pub encoding: EncodingPolicy,
}

/// Which characters are rejected in path names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub rules: PathRules,
    /// Characters rejected on top of the selected rule set
    pub extra_illegal_chars: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fingerprint: FingerprintConfig {
                encoding: EncodingPolicy::Legacy,
            },
            paths: PathsConfig {
                rules: PathRules::Host,
                extra_illegal_chars: String::new(),
            },
            logging: LoggingConfig {
                filter: "error".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from image-helpers.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(None)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(Some(path))
    }

    fn build(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let defaults = AppConfig::default();
        let config = Config::builder()
            .set_default("fingerprint.encoding", defaults.fingerprint.encoding.to_string())?
            .set_default("paths.rules", "host")?
            .set_default("paths.extra_illegal_chars", defaults.paths.extra_illegal_chars)?
            .set_default("logging.filter", defaults.logging.filter)?
            .add_source(file)
            // IMAGE_HELPERS__FINGERPRINT__ENCODING etc.
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Fingerprinter honouring the configured encoding policy
    pub fn fingerprinter(&self) -> Fingerprinter {
        Fingerprinter::new(self.fingerprint.encoding)
    }

    /// Path validator for the configured rule set plus any extra characters
    pub fn path_validator(&self) -> PathValidator {
        let illegal = self
            .paths
            .rules
            .illegal_chars()
            .with_extra(self.paths.extra_illegal_chars.chars());
        PathValidator::new(illegal)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
