use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::text::require_text;
use crate::types::{PathCheck, PathKind};
use crate::validation::paths::PathRules;
use clap::Args;
use tracing::info;

use super::OutputFormat;

/// Check whether text is usable as a path name or a `~/` virtual path
#[derive(Args, Debug)]
pub struct ValidatePathCommand {
    /// Path to validate
    pub text: Option<String>,

    /// Require the `~/` virtual path prefix
    #[arg(long = "virtual")]
    pub virtual_path: bool,

    /// Illegal character rules (overrides config): host, windows, unix
    #[arg(long)]
    pub rules: Option<PathRules>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ValidatePathCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        print!("{}", self.render(config)?);
        Ok(())
    }

    pub fn render(&self, config: &AppConfig) -> AppResult<String> {
        let text = require_text(self.text.as_deref())?;

        let mut config = config.clone();
        if let Some(rules) = self.rules {
            config.paths.rules = rules;
        }
        let validator = config.path_validator();

        let (kind, valid) = if self.virtual_path {
            (PathKind::Virtual, validator.is_valid_virtual_path_name(text))
        } else {
            (PathKind::Name, validator.is_valid_path_name(text))
        };
        info!(?kind, valid, rules = ?config.paths.rules, "Validated path");

        match self.format {
            OutputFormat::Json => {
                let check = PathCheck {
                    input: text.to_string(),
                    kind,
                    valid,
                };
                Ok(format!("{}\n", serde_json::to_string_pretty(&check)?))
            }
            OutputFormat::Text => Ok(if valid { "valid\n" } else { "invalid\n" }.to_string()),
        }
    }
}
