use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::text::{extract_positive_integers, require_text};
use crate::types::IntegerExtraction;
use clap::Args;
use tracing::info;

use super::OutputFormat;

/// Extract every positive integer embedded in text
#[derive(Args, Debug)]
pub struct ExtractIntegersCommand {
    /// Text to scan
    pub text: Option<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ExtractIntegersCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        print!("{}", self.render(config)?);
        Ok(())
    }

    pub fn render(&self, _config: &AppConfig) -> AppResult<String> {
        let text = require_text(self.text.as_deref())?;
        let values = extract_positive_integers(text)?;
        info!(found = values.len(), "Extracted integers");

        match self.format {
            OutputFormat::Json => {
                let extraction = IntegerExtraction {
                    input: text.to_string(),
                    values,
                };
                Ok(format!("{}\n", serde_json::to_string_pretty(&extraction)?))
            }
            OutputFormat::Text => {
                let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                Ok(format!("{}\n", joined.join(" ")))
            }
        }
    }
}
