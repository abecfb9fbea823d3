//! Checks against a scaffolded site directory: does it look like a site,
//! and which asset mode was it scaffolded in.

use crate::error::{Error, Result};
use crate::frontend;
use crate::types::AssetMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Layout file every generated page references.
pub const LAYOUT_NAME: &str = "govuk-default.html";

/// Jekyll configuration file marking a scaffolded site.
pub const CONFIG_FILE: &str = "_config.yml";

pub fn layout_path(site_dir: &Path) -> PathBuf {
    site_dir.join("_layouts").join(LAYOUT_NAME)
}

/// Confirm `site_dir` holds a scaffolded site, i.e. the shared layout
/// exists. Callers treat this as a precondition and write nothing on error.
pub fn ensure_site(site_dir: &Path) -> Result<()> {
    if !site_dir.is_dir() {
        return Err(Error::InvalidSite(format!(
            "'{}' is not a directory",
            site_dir.display()
        )));
    }

    let layout = layout_path(site_dir);
    if !layout.exists() {
        return Err(Error::InvalidSite(format!(
            "no _layouts/{} found under '{}'",
            LAYOUT_NAME,
            site_dir.display()
        )));
    }

    Ok(())
}

/// Sniff whether the layout links assets from the CDN or the local tree.
pub fn detect_asset_mode(site_dir: &Path) -> Result<AssetMode> {
    ensure_site(site_dir)?;
    let content = fs::read_to_string(layout_path(site_dir))?;

    if content.contains(frontend::CDN_HOST) {
        Ok(AssetMode::Cdn)
    } else {
        Ok(AssetMode::SelfHosted)
    }
}

/// The subset of `_config.yml` the kit reads back.
#[derive(Debug, Deserialize)]
struct RawSiteConfig {
    title: Option<String>,
}

/// Read the site title out of `_config.yml`, if the file is present.
pub fn site_title(site_dir: &Path) -> Result<Option<String>> {
    let path = site_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let raw: RawSiteConfig = serde_yml::from_str(&fs::read_to_string(path)?)?;
    Ok(raw.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_layout(dir: &Path, content: &str) {
        fs::create_dir_all(dir.join("_layouts")).unwrap();
        fs::write(layout_path(dir), content).unwrap();
    }

    #[test]
    fn test_ensure_site_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = ensure_site(&dir.path().join("nope"));
        assert!(matches!(result, Err(Error::InvalidSite(_))));
    }

    #[test]
    fn test_ensure_site_rejects_directory_without_layout() {
        let dir = TempDir::new().unwrap();
        let result = ensure_site(dir.path());
        assert!(matches!(result, Err(Error::InvalidSite(_))));
        assert!(result.unwrap_err().to_string().contains(LAYOUT_NAME));
    }

    #[test]
    fn test_ensure_site_accepts_scaffolded_directory() {
        let dir = TempDir::new().unwrap();
        write_layout(dir.path(), "<html></html>");
        assert!(ensure_site(dir.path()).is_ok());
    }

    #[test]
    fn test_detect_asset_mode_cdn() {
        let dir = TempDir::new().unwrap();
        write_layout(
            dir.path(),
            r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/govuk-frontend@5.10.2/dist/govuk-frontend-5.10.2.min.css">"#,
        );
        assert_eq!(detect_asset_mode(dir.path()).unwrap(), AssetMode::Cdn);
    }

    #[test]
    fn test_detect_asset_mode_self_hosted() {
        let dir = TempDir::new().unwrap();
        write_layout(
            dir.path(),
            r#"<link rel="stylesheet" href="{{ '/assets/css/govuk-frontend-5.10.2.min.css' | relative_url }}">"#,
        );
        assert_eq!(detect_asset_mode(dir.path()).unwrap(), AssetMode::SelfHosted);
    }

    #[test]
    fn test_site_title_reads_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "title: \"Demo Site\"\nmarkdown: kramdown\n",
        )
        .unwrap();
        assert_eq!(site_title(dir.path()).unwrap(), Some("Demo Site".to_string()));
    }

    #[test]
    fn test_site_title_missing_config() {
        let dir = TempDir::new().unwrap();
        assert_eq!(site_title(dir.path()).unwrap(), None);
    }
}
