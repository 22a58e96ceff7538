pub mod merge;
pub mod schema;

pub use schema::*;

use crate::cli::{Cli, Commands};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the global config dir and the
/// current directory.
const CONFIG_FILE_NAME: &str = "swarmscope.toml";

/// Load configuration by merging global, local, and CLI sources.
/// Precedence: CLI > local config > global config > defaults.
///
/// Missing config files are handled gracefully (defaults apply).
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    // Layer 1: Global config (~/.config/swarmscope/swarmscope.toml or platform equivalent)
    let global = load_global_config();

    // Layer 2: Local config (--config path, else ./swarmscope.toml)
    let local_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let local = load_layer(&local_path);

    // Layer 3: CLI args (converted to PartialConfig)
    let cli_partial = cli_to_partial(cli);

    let config = cli_partial
        .with_fallback(local)
        .with_fallback(global)
        .finalize();

    Ok(config)
}

/// Load global config from the platform-specific config directory.
/// Returns empty PartialConfig if file not found.
fn load_global_config() -> PartialConfig {
    match global_config_path() {
        Some(p) => load_layer(&p),
        None => {
            tracing::debug!("Could not determine global config directory");
            PartialConfig::default()
        }
    }
}

/// Load one config layer, logging (not propagating) any failure.
fn load_layer(path: &Path) -> PartialConfig {
    match load_toml_file(path) {
        Ok(Some(partial)) => {
            tracing::info!("Loaded config from {}", path.display());
            partial
        }
        Ok(None) => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            PartialConfig::default()
        }
        Err(e) => {
            tracing::warn!("{e}");
            PartialConfig::default()
        }
    }
}

/// Load and parse a TOML config file into a PartialConfig.
/// Returns `Ok(None)` when the file does not exist.
pub fn load_toml_file(path: &Path) -> Result<Option<PartialConfig>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::IoError {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config_file =
        toml::from_str::<ConfigFile>(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(Some(config_file.to_partial()))
}

/// Resolve the platform-specific global config path.
/// Linux: ~/.config/swarmscope/swarmscope.toml
/// macOS: ~/Library/Application Support/swarmscope/swarmscope.toml
fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "swarmscope")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Convert CLI arguments to a PartialConfig for merging.
fn cli_to_partial(cli: &Cli) -> PartialConfig {
    let mut partial = PartialConfig {
        format: cli.command.format(),
        ..Default::default()
    };

    match &cli.command {
        Commands::Health {
            response_time_ms, ..
        } => partial.assumed_response_time_ms = *response_time_ms,
        Commands::Watch { refresh_ms, .. } => partial.refresh_ms = *refresh_ms,
        _ => {}
    }

    partial
}
