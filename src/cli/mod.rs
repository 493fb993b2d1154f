use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod commands;

/// String helpers for the image pipeline: fingerprints, integer extraction, path checks
#[derive(Parser, Debug)]
#[command(name = "image-helpers")]
#[command(about = "String helpers for the image pipeline")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./image-helpers.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the MD5/SHA-1/SHA-256/SHA-512 fingerprint of text
    Fingerprint(commands::fingerprint::FingerprintCommand),
    /// Extract the positive integers embedded in text
    ExtractIntegers(commands::integers::ExtractIntegersCommand),
    /// Validate a path name or `~/` virtual path
    ValidatePath(commands::path::ValidatePathCommand),
    /// Show the effective configuration
    Config(commands::config::ShowConfigCommand),
}

impl Cli {
    /// Load configuration from --config or the default locations
    pub fn load_config(&self) -> AppResult<AppConfig> {
        let config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };
        Ok(config)
    }

    /// Run the selected command and return what it would print
    pub fn render(&self, config: &AppConfig) -> AppResult<String> {
        match &self.command {
            Commands::Fingerprint(command) => command.render(config),
            Commands::ExtractIntegers(command) => command.render(config),
            Commands::ValidatePath(command) => command.render(config),
            Commands::Config(command) => command.render(config),
        }
    }
}

/// Install the tracing subscriber
///
/// RUST_LOG takes precedence over the configured filter.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config.logging.filter);

    match &cli.command {
        Commands::Fingerprint(command) => command.run(&config),
        Commands::ExtractIntegers(command) => command.run(&config),
        Commands::ValidatePath(command) => command.run(&config),
        Commands::Config(command) => command.run(&config),
    }
}
