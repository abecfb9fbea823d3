//! Zip archive extraction.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Unpack `archive` under `dest`, preserving the archive's directory tree.
/// Entries whose names would escape `dest` are rejected.
pub fn unpack(archive: &Path, dest: &Path) -> Result<()> {
    let file =
        File::open(archive).with_context(|| format!("Failed to open {}", archive.display()))?;
    let mut zip = ZipArchive::new(file).context("Failed to read release archive")?;

    fs::create_dir_all(dest)?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(rel_path) = entry.enclosed_name() else {
            anyhow::bail!("Archive entry '{}' has an unsafe path", entry.name());
        };
        let out_path = dest.join(rel_path);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)
            .with_context(|| format!("Failed to create {}", out_path.display()))?;
        io::copy(&mut entry, &mut out)?;
    }

    Ok(())
}

/// Locate the single top-level directory a GitHub source archive unpacks
/// to (e.g. `govuk-frontend-5.10.2/`). Anything else means the archive
/// does not have the expected layout.
pub fn find_release_root(dest: &Path) -> Result<PathBuf> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dest)
        .with_context(|| format!("Failed to read {}", dest.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }

    match dirs.as_slice() {
        [root] => Ok(root.clone()),
        [] => anyhow::bail!("Archive did not contain a release directory"),
        _ => anyhow::bail!(
            "Archive layout not recognised: expected a single top-level directory, found {}",
            dirs.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn write_fixture_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (name, contents) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }

        zip.finish().unwrap();
    }

    #[test]
    fn test_unpack_preserves_tree() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("release.zip");
        write_fixture_zip(
            &archive,
            &[
                ("govuk-frontend-5.10.2/dist/govuk-frontend-5.10.2.min.css", "body{}"),
                ("govuk-frontend-5.10.2/dist/govuk-frontend-5.10.2.min.js", "void 0"),
            ],
        );

        let dest = dir.path().join("unpacked");
        unpack(&archive, &dest).unwrap();

        let css = dest.join("govuk-frontend-5.10.2/dist/govuk-frontend-5.10.2.min.css");
        assert_eq!(fs::read_to_string(css).unwrap(), "body{}");
    }

    #[test]
    fn test_unpack_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("broken.zip");
        fs::write(&archive, b"not a zip file").unwrap();

        let result = unpack(&archive, &dir.path().join("unpacked"));
        assert!(result.is_err());
    }

    #[test]
    fn test_find_release_root_single_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("govuk-frontend-5.10.2")).unwrap();
        fs::write(dir.path().join("stray-file.txt"), "ignored").unwrap();

        let root = find_release_root(dir.path()).unwrap();
        assert!(root.ends_with("govuk-frontend-5.10.2"));
    }

    #[test]
    fn test_find_release_root_empty() {
        let dir = TempDir::new().unwrap();
        let result = find_release_root(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_find_release_root_ambiguous() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("one")).unwrap();
        fs::create_dir(dir.path().join("two")).unwrap();

        let result = find_release_root(dir.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("single top-level"));
    }
}
