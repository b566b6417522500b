use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "SPLITBILL_LOG";

/// Default log file: next to the config file.
pub fn default_log_path(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|dir| dir.join("splitbill.log"))
        .unwrap_or_else(|| PathBuf::from("splitbill.log"))
}

/// Installs the global tracing subscriber.
///
/// Output goes to `path` in append mode, never to stdout, which the TUI owns.
pub fn init_tracing(path: &Path, default_level: &str) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| io::Error::other(err.to_string()))
}
