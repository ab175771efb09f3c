use super::FontService;
use crate::catalog::{CatalogLoader, FontDefinition};
use crate::config::FontConfig;
use crate::constants::{FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_PRESETS, FONT_SIZE_STEP};
use crate::storage::KeyValueStore;
use crate::style::StyleSink;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FontOption {
    pub id: String,
    pub name: String,
    pub family: String,
    pub has_ligatures: bool,
    pub is_system_font: bool,
}

impl From<&FontDefinition> for FontOption {
    fn from(font: &FontDefinition) -> Self {
        FontOption {
            id: font.id.clone(),
            name: font.name.clone(),
            family: font.family.clone(),
            has_ligatures: font.has_ligatures,
            is_system_font: font.is_system_font,
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FontSizePresetView {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FontSizeRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub presets: Vec<FontSizePresetView>,
}

impl Default for FontSizeRange {
    fn default() -> Self {
        FontSizeRange {
            min: FONT_SIZE_MIN,
            max: FONT_SIZE_MAX,
            step: FONT_SIZE_STEP,
            presets: FONT_SIZE_PRESETS
                .iter()
                .map(|preset| FontSizePresetView {
                    label: preset.label.to_string(),
                    value: preset.value,
                })
                .collect(),
        }
    }
}

/// Everything a settings panel needs to render.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FontSettingsView {
    pub config: FontConfig,
    pub ui_fonts: Vec<FontOption>,
    pub mono_fonts: Vec<FontOption>,
    pub is_loading: bool,
    pub font_size: FontSizeRange,
}

impl<S, L, K> FontService<S, L, K>
where
    S: KeyValueStore,
    L: CatalogLoader,
    K: StyleSink,
{
    pub fn snapshot(&self) -> FontSettingsView {
        FontSettingsView {
            config: self.config.clone(),
            ui_fonts: self.ui_fonts().into_iter().map(FontOption::from).collect(),
            mono_fonts: self.mono_fonts().into_iter().map(FontOption::from).collect(),
            is_loading: self.loading,
            font_size: FontSizeRange::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::loaded_service;

    #[test]
    fn snapshot_splits_fonts_by_category() {
        let service = loaded_service();
        let view = service.snapshot();
        let ui: Vec<&str> = view.ui_fonts.iter().map(|f| f.id.as_str()).collect();
        let mono: Vec<&str> = view.mono_fonts.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ui, vec!["inter", "ibm-plex-sans"]);
        assert_eq!(mono, vec!["jetbrains-mono", "fira-code"]);
        assert!(view.mono_fonts[0].has_ligatures);
        assert!(!view.is_loading);
        assert_eq!(view.font_size.presets.len(), 4);
    }

    #[test]
    fn snapshot_serializes_for_the_front_end() {
        let service = loaded_service();
        let json = serde_json::to_value(service.snapshot()).expect("serialize");
        assert_eq!(json["config"]["uiFont"], "inter");
        assert_eq!(json["uiFonts"][1]["id"], "ibm-plex-sans");
        assert_eq!(json["isLoading"], false);
        assert_eq!(json["fontSize"]["min"], 11);
        assert_eq!(json["fontSize"]["max"], 18);
        assert_eq!(json["fontSize"]["presets"][1]["label"], "Normal");
        assert_eq!(json["fontSize"]["presets"][1]["value"], 13);
    }
}
