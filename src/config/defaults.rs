pub(crate) fn default_storage_key() -> String {
    "ng-font-config".to_string()
}

pub(crate) fn default_ui_font() -> String {
    "inter".to_string()
}

pub(crate) fn default_mono_font() -> String {
    "jetbrains-mono".to_string()
}

pub(crate) fn default_font_size() -> u32 {
    13
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
