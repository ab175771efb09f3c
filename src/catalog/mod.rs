//! Font catalog: the manifest data model and the loaders that fetch it.
//!
//! A manifest lists every selectable typeface together with the files that
//! have to be downloaded for it. System fonts carry no files.

mod loader;
mod models;

pub use loader::{
    CatalogLoader, FileCatalogLoader, HttpCatalogLoader, SourceCatalogLoader, is_remote_location,
};
pub use models::{
    FontCategory, FontDefinition, FontFile, FontManifest, FontStyle, parse_manifest,
};
