use simplelog::{Config as LogConfig, WriteLogger};
use std::fs::File;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::io::IoError;

/// Installs a file logger when `log_file` is configured.
///
/// Standard output carries the wrapped text, so logs only ever go to a file.
/// Returns `false` when logging stays disabled.
pub fn init_logging(config: &Config) -> AppResult<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let log_file = File::create(path).map_err(IoError::from)?;
    WriteLogger::init(config.level_filter(), LogConfig::default(), log_file)
        .map_err(|e| AppError::Logger(e.to_string()))?;
    log::info!("logging to {} at {}", path.display(), config.log_level);
    Ok(true)
}
