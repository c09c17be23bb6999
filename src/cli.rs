//! Command line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Show the episode screen for one episode.
#[derive(Debug, Parser)]
#[command(name = "podscreen", version, about)]
pub struct Cli {
    /// Episode URI to open; omit to open the screen without one
    pub episode_uri: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop waiting after this many milliseconds without a new state
    #[arg(long, default_value_t = 2000)]
    pub settle_ms: u64,
}

impl Cli {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_uri_and_config() {
        let cli = Cli::try_parse_from(["podscreen", "ep-42", "--config", "podscreen.toml"]).unwrap();

        assert_eq!(cli.episode_uri.as_deref(), Some("ep-42"));
        assert_eq!(cli.config, Some(PathBuf::from("podscreen.toml")));
        assert_eq!(cli.settle(), Duration::from_secs(2));
    }

    #[test]
    fn test_episode_uri_is_optional() {
        let cli = Cli::try_parse_from(["podscreen"]).unwrap();

        assert!(cli.episode_uri.is_none());
        assert!(cli.config.is_none());
    }
}
