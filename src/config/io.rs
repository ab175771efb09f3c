use super::models::FontServiceOptions;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load service options from a TOML file, falling back to defaults on any error.
pub fn load_options(path: &Path) -> FontServiceOptions {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!(path = %path.display(), "No options file, using defaults: {err}");
            return FontServiceOptions::default();
        }
    };
    match parse_options(&contents) {
        Ok(options) => {
            info!(path = %path.display(), "Loaded font service options");
            options
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid options file, using defaults: {err:#}");
            FontServiceOptions::default()
        }
    }
}

pub fn parse_options(contents: &str) -> Result<FontServiceOptions> {
    toml::from_str(contents).context("Failed to parse font service options")
}

pub fn serialize_options(options: &FontServiceOptions) -> Result<String> {
    toml::to_string(options).context("Failed to serialize font service options")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn partial_options_use_defaults() {
        let options = parse_options("default_ui_font = \"roboto\"\nlog_level = \"debug\"")
            .expect("parse partial");
        assert_eq!(options.default_ui_font, "roboto");
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.storage_key, "ng-font-config");
        assert_eq!(options.default_mono_font, "jetbrains-mono");
        assert_eq!(options.default_font_size, 13);
    }

    #[test]
    fn empty_options_are_defaults() {
        assert_eq!(parse_options("").expect("parse"), FontServiceOptions::default());
    }

    #[test]
    fn options_round_trip() {
        let options = FontServiceOptions {
            storage_key: "prefs".to_string(),
            default_font_size: 15,
            ..FontServiceOptions::default()
        };
        let text = serialize_options(&options).expect("serialize");
        assert_eq!(parse_options(&text).expect("parse"), options);
    }

    #[test]
    fn load_options_falls_back_on_missing_or_bad_file() {
        let missing = std::env::temp_dir().join("font-prefs-options-missing.toml");
        assert_eq!(load_options(&missing), FontServiceOptions::default());

        let bad = std::env::temp_dir().join(format!(
            "font-prefs-options-bad-{}.toml",
            std::process::id()
        ));
        fs::write(&bad, "default_font_size = \"big\"").expect("write");
        assert_eq!(load_options(&bad), FontServiceOptions::default());
        let _ = fs::remove_file(bad);
    }
}
