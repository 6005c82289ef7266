//! Page-level configuration for the utility layer.
//!
//! Defaults match the admin templates. A page can override any field by
//! embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="cabdesk-config">
//!   { "dismiss_after_ms": 6000, "csv_filename": "bookings.csv" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::state::table::CsvMode;

pub const CONFIG_ELEMENT_ID: &str = "cabdesk-config";

pub const DEFAULT_DISMISS_AFTER_MS: u64 = 4000;
pub const DEFAULT_ALERT_SELECTOR: &str = ".alert";
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".container-fluid";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "\u{20b9}";
pub const DEFAULT_DISPLAY_OFFSET_MINUTES: i32 = 330;
pub const DEFAULT_CSV_FILENAME: &str = "export.csv";
pub const DEFAULT_ID_PREFIX: &str = "ID-";
pub const DEFAULT_PROCESSING_LABEL: &str = "Processing...";

/// Offsets beyond +/-18h are rejected by chrono and by every browser.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub dismiss_after_ms: u64,
    pub alert_selector: String,
    pub container_selector: String,
    pub currency_symbol: String,
    pub display_offset_minutes: i32,
    pub csv_filename: String,
    pub csv_mode: CsvMode,
    pub id_prefix: String,
    pub processing_label: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: DEFAULT_DISMISS_AFTER_MS,
            alert_selector: DEFAULT_ALERT_SELECTOR.to_owned(),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_owned(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            display_offset_minutes: DEFAULT_DISPLAY_OFFSET_MINUTES,
            csv_filename: DEFAULT_CSV_FILENAME.to_owned(),
            csv_mode: CsvMode::default(),
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            processing_label: DEFAULT_PROCESSING_LABEL.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON config block. Missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the config block embedded in the current page, if any.
    ///
    /// A missing block yields defaults; a malformed one is logged and ignored.
    #[cfg(feature = "hydrate")]
    pub fn from_page() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring page config: {e}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid {
                field: "display_offset_minutes",
                reason: format!("{} is outside +/-{MAX_OFFSET_MINUTES}", self.display_offset_minutes),
            });
        }
        if self.container_selector.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "container_selector", reason: "empty selector".into() });
        }
        if self.alert_selector.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "alert_selector", reason: "empty selector".into() });
        }
        if self.csv_filename.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "csv_filename", reason: "empty filename".into() });
        }
        parse_log_level(&self.log_level)?;
        Ok(())
    }

    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }

    /// Configured log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        parse_log_level(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.parse::<log::Level>().map_err(|_| ConfigError::Invalid {
        field: "log_level",
        reason: format!("unknown level '{raw}' (expected error, warn, info, debug, or trace)"),
    })
}
