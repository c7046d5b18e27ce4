//! Logging setup for tined with file output and optional stderr.
//!
//! Stdout belongs to the editor (printed lines and `?` reports), so log output never goes
//! there. Logs always go to a file at `warn` level (or higher if a filter is set).
//! Stderr logging is enabled when `TINED_LOG` or `RUST_LOG` is set.
//!
//! ## Environment Variables
//!
//! 1. **`TINED_LOG`** (highest priority) - tined-specific logging control
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for tined crates
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/tined/logs/tined-<pid>.log`
//! - macOS: `~/Library/Application Support/tined/logs/tined-12345.log`
//! - Linux: `~/.local/share/tined/logs/tined-12345.log`
//!
//! Override with `--log-file <path>` or `TINED_LOG_FILE`.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const CRATES: [&str; 3] = ["tined_core", "tined_bin", "tined_log"];

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default, Clone)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// This function respects the environment variable priority described in the module docs:
/// [`TINED_LOG`] > [`RUST_LOG`] > default settings.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program --
/// dropping it flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_file_filter());

    let stderr_layer = if env::var("TINED_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(create_filter()),
        )
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Initialize logging for tests.
///
/// Stdout-only (no file output), captured by the test harness. Will not crash if called
/// multiple times or if logging is already initialized by another test.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_test_writer()
        .try_init();
}

/// Split an override into directory and file name.
///
/// A path with an extension names the log file itself; anything else is a directory that
/// receives the default `tined-<pid>.log`.
fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("tined-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir.to_path_buf(), name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tined")
        .join("logs");

    (dir, filename)
}

/// File filter: uses user-specified level if set, otherwise defaults to `warn`.
fn create_file_filter() -> EnvFilter {
    if env::var("TINED_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return create_filter();
    }
    EnvFilter::new("warn")
}

/// Create the appropriate [`EnvFilter`] based on environment variables.
///
/// Implements the priority system: [`TINED_LOG`] > [`RUST_LOG`] > defaults.
fn create_filter() -> EnvFilter {
    if let Ok(tined_log) = env::var("TINED_LOG") {
        return EnvFilter::new(expand_tined_log(&tined_log));
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new(default_directives())
}

fn default_directives() -> String {
    expand_level("info")
}

/// Expand [`TINED_LOG`] values into full tracing filter strings.
///
/// - `TINED_LOG=debug` becomes `warn,tined_core=debug,tined_bin=debug,...`
/// - `TINED_LOG=tined_core=trace` is used as-is (advanced syntax)
fn expand_tined_log(tined_log: &str) -> String {
    if tined_log.contains('=') || tined_log.contains(':') || tined_log.contains(',') {
        return tined_log.to_string();
    }
    expand_level(tined_log)
}

fn expand_level(level: &str) -> String {
    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}
