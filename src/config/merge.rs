use super::schema::{AppConfig, PartialConfig};

/// Default polling interval for `watch` mode.
pub const DEFAULT_REFRESH_MS: u64 = 500;

/// Default assumed agent response time used by health scoring.
pub const DEFAULT_RESPONSE_TIME_MS: u64 = 150;

/// Lower bound for the polling interval so a typo can't spin the CPU.
const MIN_REFRESH_MS: u64 = 50;

impl PartialConfig {
    /// Merge self with a lower-priority fallback.
    /// Self's non-None values take precedence.
    pub fn with_fallback(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            format: self.format.or(fallback.format),
            refresh_ms: self.refresh_ms.or(fallback.refresh_ms),
            assumed_response_time_ms: self
                .assumed_response_time_ms
                .or(fallback.assumed_response_time_ms),
            log_file: self.log_file.or(fallback.log_file),
        }
    }

    /// Convert to AppConfig, filling any remaining gaps with defaults.
    pub fn finalize(self) -> AppConfig {
        AppConfig {
            format: self.format.unwrap_or_default(),
            refresh_ms: self
                .refresh_ms
                .unwrap_or(DEFAULT_REFRESH_MS)
                .max(MIN_REFRESH_MS),
            assumed_response_time_ms: self
                .assumed_response_time_ms
                .unwrap_or(DEFAULT_RESPONSE_TIME_MS),
            log_file: self.log_file,
        }
    }
}
