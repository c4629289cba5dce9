use thiserror::Error;

use crate::config::ConfigError;
use crate::io::IoError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("Logger setup failed: {0}")]
    Logger(String),
}

pub type AppResult<T> = Result<T, AppError>;
