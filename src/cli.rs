//! Command-line interface definitions.
//!
//! Two modes share one binary: `analyze` scores every article linked from
//! the configured front page and prints the results, `serve` exposes the
//! same pipeline as a JSON API.

use clap::{Parser, Subcommand};

use crate::settings;

/// Command-line arguments for the jaundice analyzer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory of charged-word dictionary files, one word per line
    #[arg(short, long, default_value = settings::DICTIONARIES_DIR)]
    pub dictionaries_dir: String,

    /// Per-article fetch timeout in seconds
    #[arg(short, long, default_value_t = settings::TIMEOUT_SECS)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score every article linked from the front page and print the results
    Analyze {
        /// Front page to scan for article links
        #[arg(long, default_value = settings::FRONTPAGE_URL)]
        frontpage_url: String,
    },
    /// Serve the scoring pipeline as a JSON API on GET /
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = settings::DEFAULT_PORT)]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["jaundice", "analyze"]);
        assert_eq!(cli.dictionaries_dir, settings::DICTIONARIES_DIR);
        assert_eq!(cli.timeout, settings::TIMEOUT_SECS);
        match cli.command {
            Command::Analyze { frontpage_url } => {
                assert_eq!(frontpage_url, settings::FRONTPAGE_URL)
            }
            other => panic!("expected analyze, got {other:?}"),
        }
    }

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::parse_from(["jaundice", "--timeout", "5", "serve", "--port", "9000"]);
        assert_eq!(cli.timeout, 5);
        match cli.command {
            Command::Serve { port } => assert_eq!(port, 9000),
            other => panic!("expected serve, got {other:?}"),
        }
    }
}
