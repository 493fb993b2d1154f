pub mod config;
pub mod fingerprint;
pub mod integers;
pub mod path;

use clap::ValueEnum;

/// Output formats shared by the subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one result per line
    #[default]
    Text,
    /// Pretty-printed JSON for programmatic use
    Json,
}
