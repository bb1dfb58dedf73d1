use std::path::{Path, PathBuf};
use std::str::FromStr;

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

pub const OUTPUT_DIR_VAR: &str = "REVHUB_OUTPUT_DIR";
pub const LOG_LEVEL_VAR: &str = "REVHUB_LOG_LEVEL";
pub const DEFAULT_OUTPUT_DIR: &str = "output/site";

/// Loads `.env` from the working directory if present and returns its path.
/// Variables already set in the environment win.
///
/// Runs before the logger exists, so the caller logs the result.
pub fn load_env() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .and_then(|dir| load_env_from(&dir))
}

pub fn load_env_from(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(".env");
    dotenv::from_path(&path).ok().map(|_| path)
}

/// Command line flag, then `REVHUB_OUTPUT_DIR`, then the default.
pub fn output_dir(flag: Option<PathBuf>) -> PathBuf {
    resolve_output_dir(flag, std::env::var(OUTPUT_DIR_VAR).ok())
}

/// Command line flag, then `REVHUB_LOG_LEVEL`, then `info`.
pub fn log_level(flag: Option<LevelFilter>) -> LevelFilter {
    resolve_log_level(flag, std::env::var(LOG_LEVEL_VAR).ok())
}

fn resolve_output_dir(flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

fn resolve_log_level(flag: Option<LevelFilter>, env: Option<String>) -> LevelFilter {
    flag.or_else(|| env.and_then(|v| LevelFilter::from_str(v.trim()).ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Logs to stderr so stdout stays clean for command output.
pub fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
