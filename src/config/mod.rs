pub mod toml_config;

pub use toml_config::ClientConfig;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "polly")]
#[command(about = "Command-line client for the Polly polling API")]
pub struct CliConfig {
    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Polly API base URL [default: http://localhost:8000]")]
    pub base_url: Option<String>,

    #[arg(long, env = "POLLY_TOKEN", hide_env_values = true, help = "JWT access token")]
    pub token: Option<String>,

    #[arg(long, help = "Request timeout in seconds [default: 10]")]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Cast a vote on a poll
    Vote {
        #[arg(long)]
        poll_id: u64,
        #[arg(long)]
        option_id: u64,
    },
    /// Fetch aggregated results of a poll
    Results {
        #[arg(long)]
        poll_id: u64,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merge the config file (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.api.token = Some(token.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            config.api.timeout_seconds = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_vote_command() {
        let cli = CliConfig::try_parse_from([
            "polly", "--token", "abc", "vote", "--poll-id", "1", "--option-id", "3",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Vote {
                poll_id: 1,
                option_id: 3
            }
        );
        assert_eq!(cli.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_results_requires_poll_id() {
        assert!(CliConfig::try_parse_from(["polly", "results"]).is_err());
        assert!(CliConfig::try_parse_from(["polly", "results", "--poll-id", "x"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[api]\nbase_url = \"http://from-file:8000\"\ntimeout_seconds = 20\ntoken = \"file-token\"\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "polly",
            "--config",
            &path,
            "--base-url",
            "http://from-flag:9000",
            "--token",
            "flag-token",
            "results",
            "--poll-id",
            "2",
        ])
        .unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.base_url(), "http://from-flag:9000");
        assert_eq!(config.token(), Some("flag-token"));
        assert_eq!(config.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_resolve_rejects_invalid_overrides() {
        let cli = CliConfig::try_parse_from([
            "polly",
            "--timeout-seconds",
            "0",
            "results",
            "--poll-id",
            "2",
        ])
        .unwrap();
        assert!(cli.resolve().is_err());
    }
}
