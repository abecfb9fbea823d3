use anyhow::{Context, Result};
use govkit_core::frontend;
use govkit_core::site::{CONFIG_FILE, LAYOUT_NAME};
use govkit_core::types::AssetMode;
use std::fs;
use std::path::{Path, PathBuf};

use super::template;

/// Jekyll directories every site gets.
const SITE_DIRS: &[&str] = &["_layouts", "_includes"];

/// Asset directories created only when self-hosting.
const ASSET_DIRS: &[&str] = &["assets/css", "assets/js", "assets/fonts", "assets/images"];

/// Create a minimal Jekyll site wired up to GOV.UK Frontend.
///
/// In self-hosted mode the assets are downloaded into the site tree before
/// the layout is written; a failed download aborts the scaffold. Remote-link
/// mode creates no local asset directory at all.
pub async fn run(output_dir: PathBuf, site_name: String, cdn: bool) -> Result<()> {
    let mode = AssetMode::from_cdn_flag(cdn);
    let version = frontend::DEFAULT_VERSION;

    println!(
        "Scaffolding Jekyll site in {} ({} assets)...",
        output_dir.display(),
        mode.as_str()
    );

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let config_path = output_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: this directory already holds a site; pick an empty one or delete the file first",
            CONFIG_FILE,
            config_path.display()
        );
    }

    create_site_dirs(&output_dir, mode)?;

    if mode.is_self_hosted() {
        println!("\nDownloading GOV.UK Frontend assets for self-hosting...");
        govkit_fetcher::fetch_assets(&output_dir.join("assets"), version)
            .await
            .context("Asset download failed; re-run with --cdn to link assets remotely instead")?;
        println!();
    }

    write_site_files(&output_dir, &site_name, mode, version)?;

    println!("\n✓ Site scaffolded ({} mode)", mode.as_str());
    println!("\nGenerated structure:");
    println!("  {}/", output_dir.display());
    println!("  ├── {}", CONFIG_FILE);
    println!("  ├── Gemfile");
    println!("  ├── README.md");
    println!("  ├── _layouts/");
    println!("  │   └── {}", LAYOUT_NAME);
    if mode.is_self_hosted() {
        println!("  ├── assets/");
        println!("  │   ├── css/");
        println!("  │   ├── js/");
        println!("  │   ├── fonts/");
        println!("  │   └── images/");
    }
    println!("  └── index.md");
    println!("\nNext steps:");
    println!("  1. cd {}", output_dir.display());
    println!("  2. bundle install --path vendor/bundle");
    println!("  3. bundle exec jekyll serve");
    println!(
        "\nRun 'govkit generate-samples {}' to add sample pages.",
        output_dir.display()
    );

    Ok(())
}

/// Create the Jekyll directory skeleton. Remote-link sites get no local
/// asset tree.
fn create_site_dirs(base: &Path, mode: AssetMode) -> Result<()> {
    for dir in SITE_DIRS {
        fs::create_dir_all(base.join(dir))?;
    }

    if mode.is_self_hosted() {
        for dir in ASSET_DIRS {
            fs::create_dir_all(base.join(dir))?;
        }
    }

    Ok(())
}

/// Write the config, Gemfile, layout, landing page, and README.
fn write_site_files(base: &Path, site_name: &str, mode: AssetMode, version: &str) -> Result<()> {
    fs::write(base.join(CONFIG_FILE), template::config_yml(site_name))
        .with_context(|| format!("Failed to write {}", CONFIG_FILE))?;
    println!("✓ Created {}", CONFIG_FILE);

    fs::write(base.join("Gemfile"), template::gemfile())?;
    println!("✓ Created Gemfile");

    if mode.is_self_hosted() {
        fs::write(base.join("assets/css/custom.css"), template::custom_css())?;
        println!("✓ Created assets/css/custom.css");
    }

    let layout_path = base.join("_layouts").join(LAYOUT_NAME);
    fs::write(&layout_path, template::layout_html(mode, version))
        .with_context(|| format!("Failed to write {}", layout_path.display()))?;
    println!("✓ Created _layouts/{}", LAYOUT_NAME);

    fs::write(base.join("index.md"), template::index_page())?;
    println!("✓ Created index.md");

    fs::write(base.join("README.md"), template::readme(site_name, mode, version))?;
    println!("✓ Created README.md");

    Ok(())
}
