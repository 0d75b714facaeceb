//! Command line interface
//!
//! Subcommands work on JSON exports of the blog, phonebook and user stores:
//! - `stats`: aggregate statistics for a blog list
//! - `info`: phonebook summary
//! - `check-number`: validate a phone number
//! - `normalize`: turn stored documents into their external form

pub mod check_number;
pub mod info;
pub mod normalize;
pub mod stats;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

/// Blog list and phonebook record tool
#[derive(Parser)]
#[command(name = "bloglist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print statistics for a blog list
    Stats(stats::StatsArgs),

    /// Print how many entries the phonebook holds
    Info(info::InfoArgs),

    /// Check whether a phone number is acceptable
    CheckNumber(check_number::CheckNumberArgs),

    /// Normalize stored documents
    Normalize(normalize::NormalizeArgs),
}

/// Load `.env` and configuration, then install logging
pub(crate) fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stats() {
        let cli = Cli::try_parse_from(["bloglist", "stats", "blogs.json"]).unwrap();

        match cli.command {
            Command::Stats(args) => {
                assert_eq!(args.file.as_deref(), Some(std::path::Path::new("blogs.json")))
            }
            _ => panic!("expected stats"),
        }
    }

    #[test]
    fn test_parse_normalize() {
        let cli =
            Cli::try_parse_from(["bloglist", "normalize", "--kind", "user", "users.json"]).unwrap();

        match cli.command {
            Command::Normalize(args) => {
                assert_eq!(args.kind, crate::domain::EntityKind::User);
            }
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let result = Cli::try_parse_from(["bloglist", "normalize", "--kind", "post", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_check_number() {
        let cli = Cli::try_parse_from(["bloglist", "check-number", "040-123456"]).unwrap();
        assert!(matches!(cli.command, Command::CheckNumber(ref args) if args.number == "040-123456"));
    }
}
