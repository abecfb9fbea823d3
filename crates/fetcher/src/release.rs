//! Release archive download and latest-version lookup against GitHub.

use anyhow::{Context, Result};
use govkit_core::frontend;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upstream GitHub repository in `owner/name` form.
pub const FRONTEND_REPO: &str = "alphagov/govuk-frontend";

const USER_AGENT: &str = concat!("govkit/", env!("CARGO_PKG_VERSION"));
const API_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub `releases/latest` response; only the tag is needed.
#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Source-archive URL for a release.
pub fn archive_url(version: &str) -> String {
    format!(
        "https://github.com/{}/archive/{}.zip",
        FRONTEND_REPO,
        frontend::release_tag(version)
    )
}

fn latest_release_url() -> String {
    format!("https://api.github.com/repos/{}/releases/latest", FRONTEND_REPO)
}

fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(API_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")
}

/// Resolve the newest upstream release tag, without the `v` prefix.
pub async fn latest_version() -> Result<String> {
    let client = http_client()?;

    let release: LatestRelease = client
        .get(latest_release_url())
        .timeout(API_TIMEOUT)
        .send()
        .await
        .context("Failed to query GitHub for the latest release")?
        .error_for_status()
        .context("GitHub release lookup failed")?
        .json()
        .await
        .context("Failed to parse GitHub release response")?;

    Ok(frontend::bare_version(&release.tag_name).to_string())
}

/// Download the release archive for `version` into `dest_dir` and return
/// the path of the written zip file.
pub async fn download_archive(version: &str, dest_dir: &Path) -> Result<PathBuf> {
    let url = archive_url(version);
    println!(
        "Downloading GOV.UK Frontend v{} from {}...",
        frontend::bare_version(version),
        url
    );

    let client = http_client()?;
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        anyhow::bail!(
            "Release v{} not found upstream (HTTP 404). Check the version number against https://github.com/{}/releases",
            frontend::bare_version(version),
            FRONTEND_REPO
        );
    }
    if !status.is_success() {
        anyhow::bail!("Failed to download GOV.UK Frontend: HTTP {}", status);
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read release archive body")?;

    let zip_path = dest_dir.join("govuk-frontend.zip");
    std::fs::write(&zip_path, &bytes)
        .with_context(|| format!("Failed to write {}", zip_path.display()))?;

    Ok(zip_path)
}
