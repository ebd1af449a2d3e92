use anyhow::{anyhow, Context};
use etcetera::base_strategy::{choose_base_strategy, BaseStrategy};
use log::{info, LevelFilter};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::APP_NAME;

pub const DEFAULT_LOG_LEVEL: &str = "error";

pub fn cache_dir() -> anyhow::Result<PathBuf> {
    let strategy = choose_base_strategy().context("Error when finding cache directory")?;
    Ok(strategy.cache_dir().join(APP_NAME))
}

pub fn default_log_file() -> anyhow::Result<PathBuf> {
    Ok(cache_dir()?.join(format!("{APP_NAME}.log")))
}

fn make_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }
    Ok(())
}

// simple-log passes the `log` crate's `SetLoggerError` message through as a string
fn is_already_initialized(err: &str) -> bool {
    err.contains("already initialized")
}

/// Sends log output to a file in the cache directory, keeping stdout free for progress lines
pub fn setup_logging(level: LevelFilter) -> anyhow::Result<()> {
    let log_path = default_log_file()?;
    make_parent_dir(&log_path)?;

    if let Err(e) = simple_log::file(log_path.to_string_lossy(), level.as_str(), 100, 10) {
        // A second initialisation in the same process is harmless
        if !is_already_initialized(&e) {
            return Err(anyhow!(
                "Failed to open log file {}: {e}",
                log_path.display()
            ));
        }
    }

    info!("Logging initialized at {}", log_path.display());
    Ok(())
}
