#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "resistor-kit")]
#[command(about = "Resistor color codes, E-series values and small circuit calculators")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print results as JSON regardless of the configured format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}
