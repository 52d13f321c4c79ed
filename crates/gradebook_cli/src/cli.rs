//! Command-line argument parsing and configuration defaults.
//!
//! With no flags the gradebook lives under the user data directory, e.g.
//! `~/.local/share/gradebook/gradebook.db` with logs next to it.

use clap::Parser;
use gradebook_core::default_log_level;
use std::path::PathBuf;

/// Single-user console gradebook over an embedded SQLite file.
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the gradebook database file.
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for rolling log files (must be absolute).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        let base_dir = default_base_dir();
        let db_path = cli.db.unwrap_or_else(|| base_dir.join("gradebook.db"));
        let log_dir = cli.log_dir.unwrap_or_else(|| base_dir.join("logs"));
        let log_level = cli
            .log_level
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

fn default_base_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gradebook")
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, Cli};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::parse_from([
            "gradebook",
            "--db",
            "/tmp/g.db",
            "--log-level",
            "warn",
            "--log-dir",
            "/tmp/logs",
        ]);
        let config = AppConfig::from_cli(cli);

        assert_eq!(config.db_path, PathBuf::from("/tmp/g.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn defaults_point_into_gradebook_data_dir() {
        let cli = Cli::parse_from(["gradebook"]);
        let config = AppConfig::from_cli(cli);

        assert!(config.db_path.ends_with("gradebook/gradebook.db"));
        assert!(config.log_dir.ends_with("gradebook/logs"));
    }
}
