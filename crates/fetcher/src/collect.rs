//! Classify and copy assets out of an extracted release tree.

use anyhow::{Context, Result};
use govkit_core::manifest::AssetFiles;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Asset categories self-hosting needs from a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
    Font,
    Image,
}

impl AssetKind {
    /// Subdirectory a category's files land in.
    pub fn subdir(&self) -> &'static str {
        match self {
            AssetKind::Stylesheet => "css",
            AssetKind::Script => "js",
            AssetKind::Font => "fonts",
            AssetKind::Image => "images",
        }
    }
}

const ALL_KINDS: [AssetKind; 4] = [
    AssetKind::Stylesheet,
    AssetKind::Script,
    AssetKind::Font,
    AssetKind::Image,
];

/// Classify a file by name; `None` for files self-hosting does not need.
pub fn classify(file_name: &str) -> Option<AssetKind> {
    let lower = file_name.to_lowercase();

    if lower.ends_with(".min.css") {
        Some(AssetKind::Stylesheet)
    } else if lower.ends_with(".min.js") {
        Some(AssetKind::Script)
    } else if lower.ends_with(".woff") || lower.ends_with(".woff2") {
        Some(AssetKind::Font)
    } else if lower.ends_with(".png") || lower.ends_with(".svg") || lower.ends_with(".ico") {
        Some(AssetKind::Image)
    } else {
        None
    }
}

/// Copy every recognised asset under `release_root` into `output_dir`,
/// grouped by category. Existing files are overwritten, so re-runs do not
/// duplicate anything.
///
/// A release with no minified stylesheet or no minified script does not
/// match the expected upstream layout and is rejected.
pub fn collect_assets(release_root: &Path, output_dir: &Path) -> Result<AssetFiles> {
    for kind in ALL_KINDS {
        fs::create_dir_all(output_dir.join(kind.subdir()))
            .with_context(|| format!("Failed to create {} directory", kind.subdir()))?;
    }

    let mut files = AssetFiles::default();

    for entry in WalkDir::new(release_root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(kind) = classify(name) else {
            continue;
        };

        let dest = output_dir.join(kind.subdir()).join(name);
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;

        let bucket = match kind {
            AssetKind::Stylesheet => &mut files.css,
            AssetKind::Script => &mut files.js,
            AssetKind::Font => &mut files.fonts,
            AssetKind::Image => &mut files.images,
        };
        bucket.push(name.to_string());
    }

    // A name appearing in several release subdirectories is copied to the
    // same destination each time; the manifest lists it once.
    for bucket in [
        &mut files.css,
        &mut files.js,
        &mut files.fonts,
        &mut files.images,
    ] {
        bucket.sort();
        bucket.dedup();
    }

    if files.css.is_empty() {
        anyhow::bail!(
            "Archive does not match the expected GOV.UK Frontend layout: no minified stylesheet found"
        );
    }
    if files.js.is_empty() {
        anyhow::bail!(
            "Archive does not match the expected GOV.UK Frontend layout: no minified script found"
        );
    }

    Ok(files)
}
