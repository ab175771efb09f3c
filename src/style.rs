//! Presentation output: CSS custom properties and `@font-face` rules.
//!
//! Derivation is pure; writing goes through a [`StyleSink`] so the document
//! side can be swapped for an in-memory [`StyleSheet`].

use crate::catalog::{FontCategory, FontDefinition, FontManifest};
use crate::config::FontConfig;
use std::collections::BTreeMap;
use std::fmt::Write as _;

pub const UI_FONT_VARIABLE: &str = "--font-ui";
pub const MONO_FONT_VARIABLE: &str = "--font-mono";
pub const FONT_SIZE_VARIABLE: &str = "--font-size";

pub const UI_FALLBACK_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
pub const MONO_FALLBACK_STACK: &str = "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace";

/// Where derived styles are written.
pub trait StyleSink {
    fn set_variable(&mut self, name: &str, value: &str);
    /// Replace every previously generated rule with `rules`.
    fn replace_generated_rules(&mut self, rules: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVariable {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDirectives {
    pub variables: Vec<StyleVariable>,
    pub font_faces: String,
}

pub fn derive_directives(config: &FontConfig, manifest: &FontManifest) -> StyleDirectives {
    StyleDirectives {
        variables: derive_variables(config, &manifest.fonts),
        font_faces: font_face_rules(manifest),
    }
}

/// The three custom properties for a selection.
pub fn derive_variables(config: &FontConfig, fonts: &[FontDefinition]) -> Vec<StyleVariable> {
    let ui = resolve_family(fonts, &config.ui_font, FontCategory::SansSerif);
    let mono = resolve_family(fonts, &config.mono_font, FontCategory::Monospace);
    vec![
        StyleVariable {
            name: UI_FONT_VARIABLE,
            value: family_stack(ui, UI_FALLBACK_STACK),
        },
        StyleVariable {
            name: MONO_FONT_VARIABLE,
            value: family_stack(mono, MONO_FALLBACK_STACK),
        },
        StyleVariable {
            name: FONT_SIZE_VARIABLE,
            value: format!("{}px", config.font_size),
        },
    ]
}

fn resolve_family<'a>(
    fonts: &'a [FontDefinition],
    id: &str,
    category: FontCategory,
) -> Option<&'a str> {
    fonts
        .iter()
        .find(|font| font.id == id && font.category == category)
        .map(|font| font.family.as_str())
}

fn family_stack(family: Option<&str>, fallback: &str) -> String {
    match family {
        Some(family) => format!("'{}', {fallback}", escape_css_string(family)),
        None => fallback.to_string(),
    }
}

fn escape_css_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// One `@font-face` block per downloadable file; system fonts contribute none.
pub fn font_face_rules(manifest: &FontManifest) -> String {
    let mut rules = String::new();
    for font in manifest.fonts.iter().filter(|font| font.requires_download()) {
        let family = escape_css_string(&font.family);
        for file in &font.files {
            if !rules.is_empty() {
                rules.push('\n');
            }
            let _ = write!(
                rules,
                "@font-face {{\n  font-family: '{family}';\n  src: url('{url}') format('{format}');\n  font-weight: {weight};\n  font-style: {style};\n  font-display: swap;\n}}\n",
                url = escape_css_string(&file.url(&manifest.base_path)),
                format = file.format_hint(),
                weight = file.weight,
                style = file.style.as_css_str(),
            );
        }
    }
    rules
}

pub fn apply_variables<K: StyleSink + ?Sized>(sink: &mut K, variables: &[StyleVariable]) {
    for variable in variables {
        sink.set_variable(variable.name, &variable.value);
    }
}

/// In-memory sink that can render itself as a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    variables: BTreeMap<String, String>,
    generated_rules: String,
    variable_writes: usize,
    rule_writes: usize,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn generated_rules(&self) -> &str {
        &self.generated_rules
    }

    pub fn variable_writes(&self) -> usize {
        self.variable_writes
    }

    pub fn rule_writes(&self) -> usize {
        self.rule_writes
    }

    /// Generated rules followed by a `:root` block holding the variables.
    pub fn render(&self) -> String {
        let mut css = self.generated_rules.clone();
        if !self.variables.is_empty() {
            if !css.is_empty() {
                css.push('\n');
            }
            css.push_str(":root {\n");
            for (name, value) in &self.variables {
                let _ = writeln!(css, "  {name}: {value};");
            }
            css.push_str("}\n");
        }
        css
    }
}

impl StyleSink for StyleSheet {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
        self.variable_writes += 1;
    }

    fn replace_generated_rules(&mut self, rules: &str) {
        self.generated_rules = rules.to_string();
        self.rule_writes += 1;
    }
}
