//! Downloads GOV.UK Frontend release archives and lays the contained
//! style, script, font, and image assets out for self-hosting.

pub mod collect;
pub mod extract;
pub mod release;

use anyhow::{Context, Result};
use chrono::Local;
use govkit_core::frontend;
use govkit_core::manifest::{AssetFiles, AssetManifest};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// What a fetch produced, for caller-side reporting.
#[derive(Debug)]
pub struct FetchSummary {
    pub version: String,
    pub files: AssetFiles,
    pub manifest_path: PathBuf,
}

/// Fetch one release into `output_dir`.
///
/// The archive is downloaded and unpacked in a scratch directory; only the
/// recognised assets land in `output_dir`, grouped into `css/`, `js/`,
/// `fonts/`, and `images/`. Re-running with the same version overwrites
/// the previous file set rather than duplicating it.
pub async fn fetch_assets(output_dir: &Path, version: &str) -> Result<FetchSummary> {
    let version = frontend::bare_version(version).to_string();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let scratch = TempDir::new().context("Failed to create temporary directory")?;

    let archive = release::download_archive(&version, scratch.path()).await?;

    println!("Extracting release archive...");
    let unpack_dir = scratch.path().join("unpacked");
    extract::unpack(&archive, &unpack_dir)?;
    let release_root = extract::find_release_root(&unpack_dir)?;

    let files = collect::collect_assets(&release_root, output_dir)?;

    let today = Local::now().format("%Y-%m-%d").to_string();
    let manifest = AssetManifest::new(&version, &today, files);
    let manifest_path = manifest
        .write(output_dir)
        .context("Failed to write version manifest")?;

    Ok(FetchSummary {
        version,
        files: manifest.files,
        manifest_path,
    })
}
