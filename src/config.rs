use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_WIDTH: i64 = 80;
const DEFAULT_CJK: bool = false;
const DEFAULT_JOIN_LINES: bool = false;
const DEFAULT_LOG_LEVEL: &str = "info";
const ENV_PREFIX: &str = "WORDWRAP";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    width: Option<i64>,
    cjk: Option<bool>,
    join_lines: Option<bool>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

/// Resolved settings. Every field has a value, either a default or an
/// override from one of the layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub input: Option<PathBuf>, // From command line argument
    pub width: i64,
    pub cjk: bool,
    pub join_lines: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: None,
            width: DEFAULT_WIDTH,
            cjk: DEFAULT_CJK,
            join_lines: DEFAULT_JOIN_LINES,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// The log level as a filter. Only valid after [`validate_config`].
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Wrap text to a display width", long_about = None)]
pub struct CliArgs {
    /// File to wrap; standard input when omitted or "-"
    pub input: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum line width in columns; zero or less disables wrapping
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Count East Asian ambiguous-width characters as two columns
    #[arg(long)]
    pub cjk: Option<bool>,

    /// Wrap the whole input as one text instead of line by line
    #[arg(long)]
    pub join_lines: Option<bool>,

    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

/// Loads configuration from all sources.
pub fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__");
    // Missing env vars are fine; only a malformed environment fails here.
    let env_map: Map<String, Value> = env_source.collect()?;

    build_config_from_args(args, Some(env_map))
}

// Separate function to allow testing with specific args and override sources
pub fn build_config_from_args(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<Config, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    // Overrides (environment, or a map in tests) beat the file.
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded_sources: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let config = Config {
        input: args.input.clone(),
        width: args
            .width
            .or(loaded_sources.width)
            .unwrap_or(DEFAULT_WIDTH),
        cjk: args.cjk.or(loaded_sources.cjk).unwrap_or(DEFAULT_CJK),
        join_lines: args
            .join_lines
            .or(loaded_sources.join_lines)
            .unwrap_or(DEFAULT_JOIN_LINES),
        log_file: args.log_file.clone().or(loaded_sources.log_file),
        log_level: args
            .log_level
            .clone()
            .or(loaded_sources.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    };

    validate_config(&config)?;
    log::debug!("resolved configuration from {:?}", config_file_path);

    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("wordwrap").join("config.toml"))
}

/// Validates the merged configuration.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if LevelFilter::from_str(&config.log_level).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "unknown log level: {}",
            config.log_level
        )));
    }
    Ok(())
}
