//! Command-line interface for the tic-tac-toe TUI.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - play in the terminal with keyboard or mouse
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the file named in the config
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["tictactoe", "-c", "mine.toml", "--log-file", "/tmp/t.log"]);
        assert_eq!(cli.config, PathBuf::from("mine.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/t.log")));
    }
}
