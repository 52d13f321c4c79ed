//! Console gradebook entry point.
//!
//! # Responsibility
//! - Parse flags, initialize logging, open the store, run one session.
//! - Keep all behavior in `gradebook_core`; this binary only wires it up.

mod cli;
mod shell;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::{AppConfig, Cli};
use gradebook_core::{init_logging, SqliteGradeStore, StudentService};
use log::error;
use std::io::{self, BufReader};

fn main() -> Result<()> {
    let config = AppConfig::from_cli(Cli::parse());

    let log_dir = config.log_dir.to_string_lossy().to_string();
    init_logging(&config.log_level, &log_dir).map_err(|message| anyhow!(message))?;

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory `{}`", parent.display()))?;
    }

    let store = SqliteGradeStore::new(&config.db_path);
    store.initialize().with_context(|| {
        format!(
            "failed to open gradebook database `{}`",
            config.db_path.display()
        )
    })?;

    let service = StudentService::new(store);
    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut output = io::stdout();

    if let Err(err) = shell::run_session(&service, &mut input, &mut output) {
        error!("event=session module=cli status=error error={err}");
        return Err(err);
    }

    Ok(())
}
