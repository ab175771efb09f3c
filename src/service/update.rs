use super::FontService;
use crate::catalog::{CatalogLoader, FontCategory, FontManifest};
use crate::constants::clamp_font_size;
use crate::storage::{KeyValueStore, save_font_config};
use crate::style::{StyleSink, apply_variables, derive_variables, font_face_rules};
use anyhow::Result;
use tracing::{debug, info, warn};

/// Follow-up work queued by a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Effect {
    RegenerateFontFaces,
    ApplyVariables,
    SaveConfig,
}

impl<S, L, K> FontService<S, L, K>
where
    S: KeyValueStore,
    L: CatalogLoader,
    K: StyleSink,
{
    /// Fetch the manifest at `location` and ingest it.
    ///
    /// A failed fetch leaves the catalog and selection untouched.
    pub fn load_fonts(&mut self, location: &str) {
        self.begin_load();
        let result = self.loader.fetch(location);
        if let Err(err) = &result {
            warn!(%location, "Failed to load font manifest: {err:#}");
        }
        self.finish_load(result);
    }

    /// Mark a fetch as in flight. Pair with [`Self::finish_load`].
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Settle an in-flight fetch, ingesting the manifest on success.
    pub fn finish_load(&mut self, result: Result<FontManifest>) {
        self.loading = false;
        match result {
            Ok(manifest) => self.ingest_catalog(manifest),
            Err(err) => debug!("Keeping previous font catalog: {err:#}"),
        }
    }

    /// Replace the catalog and repair selections that no longer resolve.
    pub fn ingest_catalog(&mut self, manifest: FontManifest) {
        let duplicates = manifest.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(?duplicates, "Font manifest repeats ids; first entry wins");
        }
        info!(
            fonts = manifest.fonts.len(),
            base_path = %manifest.base_path,
            "Font catalog loaded"
        );
        self.manifest = manifest;
        let repaired = self.validate_selection();
        if repaired {
            debug!(config = ?self.config, "Selection repaired against new catalog");
        }
        self.run_effects(&[
            Effect::RegenerateFontFaces,
            Effect::ApplyVariables,
            Effect::SaveConfig,
        ]);
    }

    /// Select a UI font. Returns whether the id named a loaded sans-serif font.
    pub fn set_ui_font(&mut self, id: &str) -> bool {
        self.select_font(id, FontCategory::SansSerif)
    }

    /// Select a monospace font. Returns whether the id named a loaded monospace font.
    pub fn set_mono_font(&mut self, id: &str) -> bool {
        self.select_font(id, FontCategory::Monospace)
    }

    pub fn set_font_size(&mut self, size: i64) {
        let clamped = clamp_font_size(size);
        if clamped != self.config.font_size {
            debug!(
                old = self.config.font_size,
                new = clamped,
                requested = size,
                "Font size changed"
            );
            self.config.font_size = clamped;
            self.run_effects(&[Effect::ApplyVariables, Effect::SaveConfig]);
        }
    }

    pub fn reset_to_defaults(&mut self) {
        debug!(defaults = ?self.defaults, "Font config reset to defaults");
        self.config = self.defaults.clone();
        self.run_effects(&[Effect::ApplyVariables, Effect::SaveConfig]);
    }

    fn select_font(&mut self, id: &str, category: FontCategory) -> bool {
        let accepted = self
            .manifest
            .in_category(category)
            .any(|font| font.id == id);
        if !accepted {
            debug!(%id, %category, "Ignoring unknown font selection");
            return false;
        }
        let slot = match category {
            FontCategory::SansSerif => &mut self.config.ui_font,
            FontCategory::Monospace => &mut self.config.mono_font,
        };
        if slot.as_str() != id {
            debug!(%category, old = %slot, new = %id, "Font changed");
            *slot = id.to_string();
            self.run_effects(&[Effect::ApplyVariables, Effect::SaveConfig]);
        }
        true
    }

    /// Point each slot that no longer resolves at the first font of its category.
    ///
    /// A slot with no candidate in the catalog is left as it is.
    fn validate_selection(&mut self) -> bool {
        let ui = self.replacement_for(&self.config.ui_font, FontCategory::SansSerif);
        let mono = self.replacement_for(&self.config.mono_font, FontCategory::Monospace);
        let changed = ui.is_some() || mono.is_some();
        if let Some(id) = ui {
            debug!(old = %self.config.ui_font, new = %id, "UI font not in catalog");
            self.config.ui_font = id;
        }
        if let Some(id) = mono {
            debug!(old = %self.config.mono_font, new = %id, "Mono font not in catalog");
            self.config.mono_font = id;
        }
        changed
    }

    fn replacement_for(&self, current: &str, category: FontCategory) -> Option<String> {
        let mut candidates = self.manifest.in_category(category).peekable();
        let first = candidates.peek().map(|font| font.id.clone());
        if candidates.any(|font| font.id == current) {
            return None;
        }
        first
    }

    fn run_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::RegenerateFontFaces => {
                    let rules = font_face_rules(&self.manifest);
                    self.sink.replace_generated_rules(&rules);
                }
                Effect::ApplyVariables | Effect::SaveConfig if self.manifest.fonts.is_empty() => {
                    debug!(?effect, "Catalog empty; skipping");
                }
                Effect::ApplyVariables => {
                    let variables = derive_variables(&self.config, &self.manifest.fonts);
                    apply_variables(&mut self.sink, &variables);
                }
                Effect::SaveConfig => {
                    save_font_config(&self.storage, &self.options.storage_key, &self.config);
                }
            }
        }
    }
}
