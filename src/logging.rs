//! File logging
//!
//! The TUI owns stdout, so tracing output goes to an append-only file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::WdidError;

pub const DEFAULT_FILTER: &str = "wdid=info";

/// `<data dir>/logs/wdid.log`
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "", "wdid").map(|dirs| dirs.data_dir().join("logs").join("wdid.log"))
}

/// Open the log for appending, creating parent directories. The file is
/// owner read/write only on unix.
pub fn open_log_file(path: &Path) -> Result<File, WdidError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().append(true).create(true).open(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = file.metadata()?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(file)
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging(path: Option<PathBuf>) -> Result<PathBuf, WdidError> {
    let path = path
        .or_else(default_log_path)
        .ok_or_else(|| WdidError::Logging("no data directory for the log file".to_string()))?;
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|err| WdidError::Logging(err.to_string()))?;

    Ok(path)
}
