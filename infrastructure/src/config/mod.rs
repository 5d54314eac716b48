//! Configuration file loading for the circleci orb client
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CIRCLECI_ENDPOINT` / `CIRCLECI_TOKEN` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./.circleci.toml` or `./circleci.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/circleci/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ENDPOINT, FileApiConfig, FileConfig, FileHttpConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
