//! Debug logging to a file
//!
//! The terminal belongs to the UI, so log output goes to a file in the
//! system temp directory. `main` only calls `init` in debug builds.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

use crate::error::LapwatchError;

const LOG_FILE: &str = "lapwatch-debug.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Route `log` output to `log_path()`. Level comes from `RUST_LOG`, default
/// `debug`.
pub fn init() -> Result<PathBuf, LapwatchError> {
    let path = log_path();
    let file = File::create(&path)?;

    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    Ok(path)
}
