use crate::config::AppConfig;
use crate::crypto::fingerprint::{EncodingPolicy, Fingerprinter, HashAlgorithm};
use crate::errors::AppResult;
use crate::text::require_text;
use crate::types::FingerprintReport;
use clap::Args;
use tracing::info;

use super::OutputFormat;

/// Compute text fingerprints
#[derive(Args, Debug)]
pub struct FingerprintCommand {
    /// Text to fingerprint
    pub text: Option<String>,

    /// Digest algorithm: md5, sha1, sha256, sha512
    #[arg(long, short, default_value = "sha256")]
    pub algorithm: HashAlgorithm,

    /// Print the fingerprint for every algorithm
    #[arg(long)]
    pub all: bool,

    /// Encoding policy (overrides config): legacy, utf8
    #[arg(long)]
    pub encoding: Option<EncodingPolicy>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl FingerprintCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        print!("{}", self.render(config)?);
        Ok(())
    }

    pub fn render(&self, config: &AppConfig) -> AppResult<String> {
        let text = require_text(self.text.as_deref())?;
        let printer = self
            .encoding
            .map(Fingerprinter::new)
            .unwrap_or_else(|| config.fingerprinter());

        let algorithms = if self.all {
            HashAlgorithm::ALL.to_vec()
        } else {
            vec![self.algorithm]
        };
        info!(
            policy = %printer.policy(),
            count = algorithms.len(),
            "Fingerprinting input"
        );

        let reports: Vec<FingerprintReport> = algorithms
            .into_iter()
            .map(|algorithm| FingerprintReport {
                algorithm,
                bits: algorithm.bits(),
                encoding: algorithm.encoding_for(printer.policy()),
                digest: printer.fingerprint(algorithm, text),
            })
            .collect();

        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&reports)?)),
            OutputFormat::Text if self.all => Ok(reports
                .iter()
                .map(|r| format!("{:<7} {}\n", r.algorithm, r.digest))
                .collect()),
            OutputFormat::Text => Ok(reports
                .iter()
                .map(|r| format!("{}\n", r.digest))
                .collect()),
        }
    }
}
