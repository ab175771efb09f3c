use super::models::{FontManifest, parse_manifest};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Fetches a manifest document from a location.
pub trait CatalogLoader {
    fn fetch(&self, location: &str) -> Result<FontManifest>;
}

/// Reads manifests from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCatalogLoader;

impl CatalogLoader for FileCatalogLoader {
    fn fetch(&self, location: &str) -> Result<FontManifest> {
        let path = Path::new(location);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read font manifest {}", path.display()))?;
        debug!(path = %path.display(), bytes = contents.len(), "Read font manifest");
        parse_manifest(&contents).with_context(|| format!("Invalid manifest at {}", path.display()))
    }
}

/// Fetches manifests over HTTP(S) with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpCatalogLoader {
    client: reqwest::blocking::Client,
}

impl HttpCatalogLoader {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl CatalogLoader for HttpCatalogLoader {
    fn fetch(&self, location: &str) -> Result<FontManifest> {
        let response = self
            .client
            .get(location)
            .send()
            .with_context(|| format!("Failed to request font manifest {location}"))?
            .error_for_status()
            .with_context(|| format!("Font manifest request rejected: {location}"))?;
        let body = response
            .text()
            .with_context(|| format!("Failed to read font manifest body from {location}"))?;
        debug!(url = %location, bytes = body.len(), "Fetched font manifest");
        parse_manifest(&body).with_context(|| format!("Invalid manifest at {location}"))
    }
}

/// Sends `http://` and `https://` locations to HTTP, everything else to disk.
#[derive(Debug, Clone)]
pub struct SourceCatalogLoader {
    http: HttpCatalogLoader,
    file: FileCatalogLoader,
}

impl SourceCatalogLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: HttpCatalogLoader::new()?,
            file: FileCatalogLoader,
        })
    }
}

pub fn is_remote_location(location: &str) -> bool {
    let lowered = location.trim_start().to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}

impl CatalogLoader for SourceCatalogLoader {
    fn fetch(&self, location: &str) -> Result<FontManifest> {
        if is_remote_location(location) {
            self.http.fetch(location)
        } else {
            self.file.fetch(location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_manifest(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "font-prefs-loader-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).expect("write temp manifest");
        path
    }

    #[test]
    fn file_loader_reads_manifest() {
        let path = temp_manifest(
            "ok",
            r#"{ "basePath": "/f", "fonts": [
                { "id": "inter", "name": "Inter", "family": "Inter", "category": "sans-serif", "weights": [400] }
            ] }"#,
        );
        let manifest = FileCatalogLoader
            .fetch(path.to_str().expect("utf8 path"))
            .expect("fetch");
        assert_eq!(manifest.fonts.len(), 1);
        assert_eq!(manifest.base_path, "/f");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn file_loader_reports_missing_and_malformed() {
        let missing = std::env::temp_dir().join("font-prefs-loader-does-not-exist.json");
        assert!(FileCatalogLoader.fetch(missing.to_str().expect("utf8")).is_err());

        let path = temp_manifest("bad", "{ not json");
        let err = FileCatalogLoader
            .fetch(path.to_str().expect("utf8"))
            .expect_err("malformed manifest");
        assert!(format!("{err:#}").contains("Invalid manifest"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn remote_detection() {
        assert!(is_remote_location("https://cdn.example.com/fonts.json"));
        assert!(is_remote_location("HTTP://host/fonts.json"));
        assert!(!is_remote_location("assets/fonts/manifest.json"));
        assert!(!is_remote_location("file:///tmp/fonts.json"));
    }
}
