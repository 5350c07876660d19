use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Env var naming a log file. When unset, logs go to stderr.
pub const LOG_FILE_ENV_VAR: &str = "CINETRACK_LOG";

/// Install the global subscriber.
///
/// Level comes from `RUST_LOG` (default `warn`). Output goes to stderr so
/// stdout stays reserved for command output, unless `CINETRACK_LOG` names a
/// file, in which case this process writes to its own copy of it.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_timer(UtcTime::rfc_3339());

    match open_log_file() {
        Some(file) => builder.with_writer(Mutex::new(file)).with_ansi(false).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
}

/// `{CINETRACK_LOG}.{unix_secs}.{pid}`, created fresh. `None` when the var is
/// unset or the file cannot be created.
fn open_log_file() -> Option<File> {
    let base = std::env::var(LOG_FILE_ENV_VAR).ok()?;
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = format!("{}.{}.{}", base, secs, std::process::id());

    match File::create(&path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("Warning: cannot open log file {}: {}", path, err);
            None
        }
    }
}
