use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;

/// Print the effective configuration as TOML
#[derive(Args, Debug)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        print!("{}", self.render(config)?);
        Ok(())
    }

    pub fn render(&self, config: &AppConfig) -> AppResult<String> {
        Ok(config.to_toml()?)
    }
}
