use anyhow::Result;
use govkit_core::frontend;
use std::path::PathBuf;

/// Download a GOV.UK Frontend release and lay its assets out for
/// self-hosting under `output_dir`.
pub async fn run(output_dir: PathBuf, version: Option<String>, latest: bool) -> Result<()> {
    let version = resolve_version(version, latest).await;

    let summary = govkit_fetcher::fetch_assets(&output_dir, &version).await?;

    println!();
    println!("✓ Asset download and extraction complete");
    println!("  Version: v{}", summary.version);
    println!("  Assets saved to: {}", output_dir.display());
    println!("  CSS files: {}", summary.files.css.len());
    println!("  JavaScript files: {}", summary.files.js.len());
    println!("  Font files: {}", summary.files.fonts.len());
    println!("  Image files: {}", summary.files.images.len());
    println!("  Version manifest: {}", summary.manifest_path.display());

    Ok(())
}

/// Pick the release to download. `--latest` asks GitHub and falls back to
/// the pinned default when the lookup fails; the fallback is reported.
async fn resolve_version(version: Option<String>, latest: bool) -> String {
    if let Some(version) = version {
        return frontend::bare_version(&version).to_string();
    }

    if latest {
        match govkit_fetcher::release::latest_version().await {
            Ok(version) => {
                println!("Latest upstream release: v{}", version);
                return version;
            }
            Err(err) => {
                eprintln!(
                    "⚠ Could not resolve the latest release ({}); using v{}",
                    err,
                    frontend::DEFAULT_VERSION
                );
            }
        }
    }

    frontend::DEFAULT_VERSION.to_string()
}
