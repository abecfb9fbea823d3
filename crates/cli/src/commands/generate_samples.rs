use anyhow::{Context, Result};
use govkit_core::site;
use std::fs;
use std::path::PathBuf;

use super::template;

/// Sample pages and their bodies, in write order.
fn sample_pages() -> [(&'static str, &'static str); 3] {
    [
        ("start-page.md", template::start_page()),
        ("question-page.md", template::question_page()),
        ("components.md", template::components_page()),
    ]
}

/// Write the sample pages into an already-scaffolded site.
///
/// The layout check runs before anything is written, so a bad target
/// directory produces an error and no partial output.
pub async fn run(site_dir: PathBuf) -> Result<()> {
    if !site_dir.is_dir() {
        anyhow::bail!(
            "Directory '{}' does not exist.\nHint: run 'govkit scaffold-site {}' first",
            site_dir.display(),
            site_dir.display()
        );
    }

    if let Err(err) = site::ensure_site(&site_dir) {
        anyhow::bail!(
            "{}\nHint: run 'govkit scaffold-site {}' first",
            err,
            site_dir.display()
        );
    }

    let mode = site::detect_asset_mode(&site_dir)?;

    match site::site_title(&site_dir)? {
        Some(title) => println!("Adding sample pages to '{}'...", title),
        None => println!("Adding sample pages to {}...", site_dir.display()),
    }

    for (name, contents) in sample_pages() {
        fs::write(site_dir.join(name), contents)
            .with_context(|| format!("Failed to write {}", name))?;
        println!("✓ Created {}", name);
    }

    println!("\n✓ Sample pages created ({} assets)", mode.as_str());
    println!("\nTo serve the site:");
    println!("  cd {}", site_dir.display());
    println!("  bundle install --path vendor/bundle");
    println!("  bundle exec jekyll serve");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use govkit_core::types::AssetMode;
    use std::path::Path;
    use tempfile::TempDir;

    fn scaffold_minimal_site(dir: &Path, mode: AssetMode) {
        fs::create_dir_all(dir.join("_layouts")).unwrap();
        fs::write(
            site::layout_path(dir),
            template::layout_html(mode, "5.10.2"),
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path().join("nope")).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scaffold-site"));
    }

    #[tokio::test]
    async fn test_rejects_unscaffolded_directory_without_writing() {
        let dir = TempDir::new().unwrap();

        let result = run(dir.path().to_path_buf()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scaffold-site"));

        // Precondition failure must not leave partial output behind
        assert!(!dir.path().join("start-page.md").exists());
        assert!(!dir.path().join("question-page.md").exists());
        assert!(!dir.path().join("components.md").exists());
    }

    #[tokio::test]
    async fn test_writes_three_pages_referencing_the_layout() {
        let dir = TempDir::new().unwrap();
        scaffold_minimal_site(dir.path(), AssetMode::Cdn);

        run(dir.path().to_path_buf()).await.unwrap();

        for (name, _) in sample_pages() {
            let content = fs::read_to_string(dir.path().join(name)).unwrap();
            assert!(content.starts_with("---\nlayout: govuk-default\n"), "{}", name);
        }
    }

    #[tokio::test]
    async fn test_runs_against_self_hosted_site() {
        let dir = TempDir::new().unwrap();
        scaffold_minimal_site(dir.path(), AssetMode::SelfHosted);

        run(dir.path().to_path_buf()).await.unwrap();
        assert!(dir.path().join("components.md").exists());
    }
}
