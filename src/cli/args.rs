//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use clap::Parser;
use log::LevelFilter;

use crate::config::Config;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "resnap")]
#[command(about = "Create and manage DaVinci Resolve timeline snapshots", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Log debug messages
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub(crate) verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.verbose && !self.quiet {
            self.verbose = config.verbose;
            self.quiet = config.quiet && !config.verbose;
        }
        self
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn default_level_is_info() {
        let cli = parse(&["resnap", "new"]);
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn verbose_raises_to_debug() {
        let cli = parse(&["resnap", "new", "--verbose"]);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn quiet_drops_to_warn() {
        let cli = parse(&["resnap", "new", "--quiet"]);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["resnap", "new", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn config_applies_when_cli_is_default() {
        let config = Config {
            verbose: true,
            ..Config::default()
        };
        let cli = parse(&["resnap", "new"]).with_config(&config);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn cli_flag_beats_config() {
        let config = Config {
            quiet: true,
            ..Config::default()
        };
        let cli = parse(&["resnap", "new", "--verbose"]).with_config(&config);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }
}
