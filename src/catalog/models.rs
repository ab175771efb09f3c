use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

/// Which selection slot a font may fill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum FontCategory {
    Monospace,
    SansSerif,
}

impl std::fmt::Display for FontCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FontCategory::Monospace => "monospace",
            FontCategory::SansSerif => "sans-serif",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_css_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// One downloadable font resource, relative to the manifest base path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
pub struct FontFile {
    pub weight: u32,
    #[serde(default)]
    pub style: FontStyle,
    pub file: String,
}

impl FontFile {
    /// Joins the file onto `base_path`, dropping one trailing slash from the base.
    pub fn url(&self, base_path: &str) -> String {
        let base = base_path.strip_suffix('/').unwrap_or(base_path);
        format!("{base}/{}", self.file)
    }

    /// `truetype` for `.ttf` files, `woff2` for everything else.
    pub fn format_hint(&self) -> &'static str {
        if self.file.to_ascii_lowercase().ends_with(".ttf") {
            "truetype"
        } else {
            "woff2"
        }
    }
}

/// A selectable typeface as declared by the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FontDefinition {
    pub id: String,
    pub name: String,
    pub family: String,
    pub category: FontCategory,
    #[serde(default)]
    pub weights: Vec<u32>,
    #[serde(default)]
    pub has_ligatures: bool,
    #[serde(default)]
    pub is_system_font: bool,
    #[serde(default)]
    pub files: Vec<FontFile>,
}

impl FontDefinition {
    pub fn requires_download(&self) -> bool {
        !self.files.is_empty()
    }
}

/// The catalog document: base path plus fonts in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FontManifest {
    #[serde(default)]
    pub base_path: String,
    pub fonts: Vec<FontDefinition>,
}

impl FontManifest {
    /// First font with the given id.
    pub fn find(&self, id: &str) -> Option<&FontDefinition> {
        self.fonts.iter().find(|font| font.id == id)
    }

    pub fn in_category(&self, category: FontCategory) -> impl Iterator<Item = &FontDefinition> {
        self.fonts
            .iter()
            .filter(move |font| font.category == category)
    }

    /// Ids that appear more than once, in first-repeat order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for font in &self.fonts {
            if !seen.insert(font.id.as_str()) && !duplicates.contains(&font.id.as_str()) {
                duplicates.push(font.id.as_str());
            }
        }
        duplicates
    }
}

pub fn parse_manifest(contents: &str) -> Result<FontManifest> {
    serde_json::from_str(contents).context("Failed to parse font manifest JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "basePath": "/assets/fonts",
        "fonts": [
            {
                "id": "inter",
                "name": "Inter",
                "family": "Inter",
                "category": "sans-serif",
                "weights": [400, 500, 600, 700],
                "files": [
                    { "weight": 400, "file": "inter/Inter-Regular.woff2" },
                    { "weight": 400, "style": "italic", "file": "inter/Inter-Italic.ttf" }
                ]
            },
            {
                "id": "jetbrains-mono",
                "name": "JetBrains Mono",
                "family": "JetBrains Mono",
                "category": "monospace",
                "weights": [400, 700],
                "hasLigatures": true,
                "files": [{ "weight": 400, "file": "jbm/JetBrainsMono-Regular.woff2" }]
            },
            {
                "id": "system-ui",
                "name": "System UI",
                "family": "system-ui",
                "category": "sans-serif",
                "weights": [400],
                "isSystemFont": true
            }
        ]
    }"#;

    #[test]
    fn parses_manifest_with_optional_fields() {
        let manifest = parse_manifest(SAMPLE).expect("parse");
        assert_eq!(manifest.base_path, "/assets/fonts");
        assert_eq!(manifest.fonts.len(), 3);

        let inter = manifest.find("inter").expect("inter");
        assert_eq!(inter.category, FontCategory::SansSerif);
        assert!(!inter.has_ligatures);
        assert_eq!(inter.files[0].style, FontStyle::Normal);
        assert_eq!(inter.files[1].style, FontStyle::Italic);

        let mono = manifest.find("jetbrains-mono").expect("mono");
        assert_eq!(mono.category, FontCategory::Monospace);
        assert!(mono.has_ligatures);

        let system = manifest.find("system-ui").expect("system");
        assert!(system.is_system_font);
        assert!(!system.requires_download());
    }

    #[test]
    fn rejects_unknown_category() {
        let bad = r#"{ "basePath": "", "fonts": [
            { "id": "x", "name": "X", "family": "X", "category": "serif" }
        ] }"#;
        assert!(parse_manifest(bad).is_err());
    }

    #[test]
    fn url_and_format_hint() {
        let file = FontFile {
            weight: 400,
            style: FontStyle::Normal,
            file: "a/B.TTF".to_string(),
        };
        assert_eq!(file.url("/fonts"), "/fonts/a/B.TTF");
        assert_eq!(file.url("/fonts/"), "/fonts/a/B.TTF");
        assert_eq!(file.format_hint(), "truetype");

        let woff = FontFile {
            file: "a/B.woff".to_string(),
            ..file
        };
        assert_eq!(woff.format_hint(), "woff2");
    }

    #[test]
    fn reports_duplicate_ids_once() {
        let mut manifest = parse_manifest(SAMPLE).expect("parse");
        let copy = manifest.fonts[0].clone();
        manifest.fonts.push(copy.clone());
        manifest.fonts.push(copy);
        assert_eq!(manifest.duplicate_ids(), vec!["inter"]);
    }

    #[test]
    fn category_filter_keeps_order() {
        let manifest = parse_manifest(SAMPLE).expect("parse");
        let ids: Vec<&str> = manifest
            .in_category(FontCategory::SansSerif)
            .map(|font| font.id.as_str())
            .collect();
        assert_eq!(ids, vec!["inter", "system-ui"]);
    }
}
