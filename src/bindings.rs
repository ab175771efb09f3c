//! TypeScript declarations for the types a front end consumes.

use crate::catalog::{FontCategory, FontDefinition, FontFile, FontManifest, FontStyle};
use crate::config::FontConfig;
use crate::service::{FontOption, FontSettingsView, FontSizePresetView, FontSizeRange};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn export_single_type<T: TS + 'static>(out_dir: &Path) -> Result<()> {
    T::export_all_to(out_dir).with_context(|| format!("Failed to export {}", T::name()))
}

/// Write one `.ts` file per type plus an `index.ts` into `out_dir`.
///
/// Stale `.ts` files in `out_dir` are removed first.
pub fn export_ts_bindings(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for entry in
        fs::read_dir(out_dir).with_context(|| format!("Failed to list {}", out_dir.display()))?
    {
        let path = entry.context("Failed to read entry")?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    export_single_type::<FontCategory>(out_dir)?;
    export_single_type::<FontStyle>(out_dir)?;
    export_single_type::<FontFile>(out_dir)?;
    export_single_type::<FontDefinition>(out_dir)?;
    export_single_type::<FontManifest>(out_dir)?;
    export_single_type::<FontConfig>(out_dir)?;
    export_single_type::<FontOption>(out_dir)?;
    export_single_type::<FontSizePresetView>(out_dir)?;
    export_single_type::<FontSizeRange>(out_dir)?;
    export_single_type::<FontSettingsView>(out_dir)?;

    let index_content = r#"export type { FontCategory } from "./FontCategory";
export type { FontStyle } from "./FontStyle";
export type { FontFile } from "./FontFile";
export type { FontDefinition } from "./FontDefinition";
export type { FontManifest } from "./FontManifest";
export type { FontConfig } from "./FontConfig";
export type { FontOption } from "./FontOption";
export type { FontSizePresetView } from "./FontSizePresetView";
export type { FontSizeRange } from "./FontSizeRange";
export type { FontSettingsView } from "./FontSettingsView";
"#;
    let index_path = out_dir.join("index.ts");
    fs::write(&index_path, index_content)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;
    Ok(())
}
