pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sailbridge")]
#[command(about = "Converts a sailing race export (JSON) into a scoring-tool competitor CSV")]
pub struct CliConfig {
    /// Race export produced by the club's race-management app
    #[arg(long, default_value = "Xmas.json")]
    pub source: String,

    /// Destination CSV consumed by the scoring tool
    #[arg(long, default_value = "competitors.csv")]
    pub output: String,

    /// Read paths from a TOML config file instead
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-stage resource usage")]
    pub monitor: bool,

    #[arg(long, help = "Parse and count competitors without writing the CSV")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_path(&self) -> &str {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("--source", &self.source)?;
        validation::validate_path("--output", &self.output)?;
        Ok(())
    }
}
