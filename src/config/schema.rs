use serde::Deserialize;
use std::path::PathBuf;

/// The TOML file structure for swarmscope.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub display: Option<DisplayConfig>,
    pub watch: Option<WatchConfig>,
    pub health: Option<HealthConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize)]
pub struct WatchConfig {
    pub refresh_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub assumed_response_time_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_file: Option<String>,
}

/// How headless commands print their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fully-resolved runtime configuration. All fields have values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub format: OutputFormat,
    pub refresh_ms: u64,
    pub assumed_response_time_ms: u64,
    /// Where `watch` mode writes its logs. `None` disables logging in the TUI.
    pub log_file: Option<PathBuf>,
}

/// Partial config used during merge. All fields are Option so that
/// missing fields don't override lower-priority values.
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub format: Option<OutputFormat>,
    pub refresh_ms: Option<u64>,
    pub assumed_response_time_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFile {
    /// Flatten the sectioned file layout into a [`PartialConfig`].
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            format: self.display.as_ref().and_then(|d| d.format),
            refresh_ms: self.watch.as_ref().and_then(|w| w.refresh_ms),
            assumed_response_time_ms: self
                .health
                .as_ref()
                .and_then(|h| h.assumed_response_time_ms),
            log_file: self
                .logging
                .as_ref()
                .and_then(|l| l.log_file.as_ref())
                .map(PathBuf::from),
        }
    }
}
