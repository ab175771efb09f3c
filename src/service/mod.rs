//! The font preference store.
//!
//! [`FontService`] owns the loaded catalog and the current selection. Every
//! mutation goes through `update.rs`, which records the follow-up work as
//! effects and runs them against the injected style sink and storage.

mod update;
mod view;

use crate::catalog::{CatalogLoader, FontCategory, FontDefinition, FontManifest};
use crate::config::{FontConfig, FontServiceOptions};
use crate::storage::{KeyValueStore, load_font_config};
use crate::style::StyleSink;
use tracing::debug;

pub use view::{FontOption, FontSettingsView, FontSizePresetView, FontSizeRange};

/// Holds the catalog and selection and keeps them consistent.
pub struct FontService<S, L, K> {
    options: FontServiceOptions,
    defaults: FontConfig,
    config: FontConfig,
    manifest: FontManifest,
    loading: bool,
    storage: S,
    loader: L,
    sink: K,
}

impl<S, L, K> FontService<S, L, K>
where
    S: KeyValueStore,
    L: CatalogLoader,
    K: StyleSink,
{
    /// Build a service, restoring any saved selection from `storage`.
    ///
    /// Nothing is written until a catalog arrives.
    pub fn new(options: FontServiceOptions, storage: S, loader: L, sink: K) -> Self {
        let defaults = FontConfig::from_options(&options);
        let config = load_font_config(&storage, &options.storage_key, &defaults);
        debug!(
            key = %options.storage_key,
            ui_font = %config.ui_font,
            mono_font = %config.mono_font,
            font_size = config.font_size,
            "Font service initialized"
        );
        Self {
            options,
            defaults,
            config,
            manifest: FontManifest::default(),
            loading: false,
            storage,
            loader,
            sink,
        }
    }

    pub fn fonts(&self) -> &[FontDefinition] {
        &self.manifest.fonts
    }

    pub fn ui_fonts(&self) -> Vec<&FontDefinition> {
        self.manifest.in_category(FontCategory::SansSerif).collect()
    }

    pub fn mono_fonts(&self) -> Vec<&FontDefinition> {
        self.manifest.in_category(FontCategory::Monospace).collect()
    }

    pub fn config(&self) -> &FontConfig {
        &self.config
    }

    pub fn current_ui_font(&self) -> &str {
        &self.config.ui_font
    }

    pub fn current_mono_font(&self) -> &str {
        &self.config.mono_font
    }

    pub fn current_font_size(&self) -> u32 {
        self.config.font_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_ui_font_def(&self) -> Option<&FontDefinition> {
        self.get_font_by_id(&self.config.ui_font)
    }

    pub fn current_mono_font_def(&self) -> Option<&FontDefinition> {
        self.get_font_by_id(&self.config.mono_font)
    }

    pub fn get_font_by_id(&self, id: &str) -> Option<&FontDefinition> {
        self.manifest.find(id)
    }

    pub fn manifest(&self) -> &FontManifest {
        &self.manifest
    }

    pub fn base_path(&self) -> &str {
        &self.manifest.base_path
    }

    pub fn options(&self) -> &FontServiceOptions {
        &self.options
    }

    /// The selection `reset_to_defaults` restores.
    pub fn defaults(&self) -> &FontConfig {
        &self.defaults
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}
