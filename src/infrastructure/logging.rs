use crate::domain::error::AppError;
use crate::infrastructure::config::Logging;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Tracing level for a configured level name. Unrecognised names mean `warn`.
pub fn level_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "error" => "error",
        _ => "warn",
    }
}

/// Filter used when `RUST_LOG` is unset: this crate logs at the configured
/// level, everything else (reqwest, hyper, rustls) stays at `warn` or quieter.
pub fn filter_directive(level: &str) -> String {
    let ours = level_directive(level);
    let others = if ours == "error" { "error" } else { "warn" };
    format!("{},{}={}", others, env!("CARGO_CRATE_NAME"), ours)
}

/// Install the global subscriber, writing to `logging.path` when set, else stderr.
pub fn init_logging(logging: &Logging) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(&logging.level))
            .map_err(|e| AppError::Config(format!("invalid log filter: {}", e)))?,
    };
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match logging.path.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => {
            let file = open_log_file(Path::new(path))?;
            subscriber
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => subscriber.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| AppError::Config(format!("could not install logger: {}", e)))
}

fn open_log_file(path: &Path) -> Result<File, AppError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
