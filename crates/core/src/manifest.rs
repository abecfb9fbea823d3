//! Version manifest written next to fetched assets, so a site records
//! which GOV.UK Frontend release it self-hosts.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the manifest inside an asset directory.
pub const MANIFEST_FILE: &str = "govuk_frontend_version.json";

/// Copied asset file names, per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetFiles {
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub fonts: Vec<String>,
    pub images: Vec<String>,
}

impl AssetFiles {
    pub fn total(&self) -> usize {
        self.css.len() + self.js.len() + self.fonts.len() + self.images.len()
    }
}

/// Records which release an asset directory holds and when it was fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub version: String,
    pub download_date: String,
    pub files: AssetFiles,
}

impl AssetManifest {
    pub fn new(version: &str, download_date: &str, files: AssetFiles) -> Self {
        AssetManifest {
            version: version.to_string(),
            download_date: download_date.to_string(),
            files,
        }
    }

    /// Write the manifest into `asset_dir`, replacing any previous one.
    pub fn write(&self, asset_dir: &Path) -> Result<PathBuf> {
        let path = asset_dir.join(MANIFEST_FILE);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    pub fn load(asset_dir: &Path) -> Result<Self> {
        let content = fs::read_to_string(asset_dir.join(MANIFEST_FILE))?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_roundtrip() {
        let dir = TempDir::new().unwrap();
        let files = AssetFiles {
            css: vec!["govuk-frontend-5.10.2.min.css".to_string()],
            js: vec!["govuk-frontend-5.10.2.min.js".to_string()],
            fonts: vec!["bold-b542beb274.woff2".to_string()],
            images: vec!["favicon.ico".to_string()],
        };

        let written = AssetManifest::new("5.10.2", "2025-06-01", files).write(dir.path()).unwrap();
        assert!(written.ends_with(MANIFEST_FILE));

        let loaded = AssetManifest::load(dir.path()).unwrap();
        assert_eq!(loaded.version, "5.10.2");
        assert_eq!(loaded.download_date, "2025-06-01");
        assert_eq!(loaded.files.total(), 4);
        assert_eq!(loaded.files.css[0], "govuk-frontend-5.10.2.min.css");
    }

    #[test]
    fn test_manifest_overwrites_previous() {
        let dir = TempDir::new().unwrap();
        AssetManifest::new("5.9.0", "2025-01-01", AssetFiles::default())
            .write(dir.path())
            .unwrap();
        AssetManifest::new("5.10.2", "2025-06-01", AssetFiles::default())
            .write(dir.path())
            .unwrap();

        let loaded = AssetManifest::load(dir.path()).unwrap();
        assert_eq!(loaded.version, "5.10.2");
    }

    #[test]
    fn test_load_missing_manifest_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = AssetManifest::load(dir.path());
        assert!(matches!(result, Err(crate::error::Error::IoError(_))));
    }

    #[test]
    fn test_empty_file_set_total() {
        assert_eq!(AssetFiles::default().total(), 0);
    }
}
