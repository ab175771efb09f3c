use crate::constants::clamp_font_size;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The user's current selection: UI font id, monospace font id and base size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FontConfig {
    pub ui_font: String,
    pub mono_font: String,
    pub font_size: u32,
}

impl FontConfig {
    /// The selection an options set starts from, with the size clamped into range.
    pub fn from_options(options: &FontServiceOptions) -> Self {
        FontConfig {
            ui_font: options.default_ui_font.clone(),
            mono_font: options.default_mono_font.clone(),
            font_size: clamp_font_size(i64::from(options.default_font_size)),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig::from_options(&FontServiceOptions::default())
    }
}

/// Construction parameters for the service; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FontServiceOptions {
    #[serde(default = "crate::config::defaults::default_storage_key")]
    pub storage_key: String,
    #[serde(default = "crate::config::defaults::default_ui_font")]
    pub default_ui_font: String,
    #[serde(default = "crate::config::defaults::default_mono_font")]
    pub default_mono_font: String,
    #[serde(default = "crate::config::defaults::default_font_size")]
    pub default_font_size: u32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for FontServiceOptions {
    fn default() -> Self {
        FontServiceOptions {
            storage_key: crate::config::defaults::default_storage_key(),
            default_ui_font: crate::config::defaults::default_ui_font(),
            default_mono_font: crate::config::defaults::default_mono_font(),
            default_font_size: crate::config::defaults::default_font_size(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_correct() {
        let options = FontServiceOptions::default();
        assert_eq!(options.storage_key, "ng-font-config");
        assert_eq!(options.default_ui_font, "inter");
        assert_eq!(options.default_mono_font, "jetbrains-mono");
        assert_eq!(options.default_font_size, 13);
        assert_eq!(options.log_level, LogLevel::Info);

        let config = FontConfig::default();
        assert_eq!(config.ui_font, "inter");
        assert_eq!(config.mono_font, "jetbrains-mono");
        assert_eq!(config.font_size, 13);
    }

    #[test]
    fn out_of_range_default_size_is_clamped() {
        let options = FontServiceOptions {
            default_font_size: 40,
            ..FontServiceOptions::default()
        };
        assert_eq!(FontConfig::from_options(&options).font_size, 18);
    }

    #[test]
    fn font_config_uses_camel_case_keys() {
        let config = FontConfig {
            ui_font: "inter".to_string(),
            mono_font: "fira-code".to_string(),
            font_size: 15,
        };
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["uiFont"], "inter");
        assert_eq!(json["monoFont"], "fira-code");
        assert_eq!(json["fontSize"], 15);
    }
}
