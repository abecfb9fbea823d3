mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "govkit")]
#[command(version, about = "Scaffolding kit for GOV.UK Frontend Jekyll sites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Download GOV.UK Frontend assets for self-hosting
    FetchAssets {
        /// Directory to place the extracted assets in
        #[arg(default_value = "assets")]
        output_dir: PathBuf,

        /// Release to download (accepts `5.10.2` or `v5.10.2`)
        #[arg(long)]
        version: Option<String>,

        /// Resolve the newest release from GitHub instead of the pinned default
        #[arg(long, conflicts_with = "version")]
        latest: bool,
    },

    /// Create a minimal Jekyll site wired up to GOV.UK Frontend
    ScaffoldSite {
        /// Directory to create the site in
        #[arg(default_value = ".")]
        output_dir: PathBuf,

        /// Human-readable site name
        #[arg(long, default_value = "GOV.UK Frontend Jekyll Site")]
        site_name: String,

        /// Link assets from the jsDelivr CDN instead of self-hosting them
        #[arg(long)]
        cdn: bool,
    },

    /// Write sample pages into an existing scaffolded site
    GenerateSamples {
        /// Directory of the scaffolded Jekyll site
        #[arg(default_value = "test_jekyll_site")]
        site_dir: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::FetchAssets {
            output_dir,
            version,
            latest,
        } => commands::fetch_assets::run(output_dir, version, latest).await,
        Command::ScaffoldSite {
            output_dir,
            site_name,
            cdn,
        } => commands::scaffold_site::run(output_dir, site_name, cdn).await,
        Command::GenerateSamples { site_dir } => commands::generate_samples::run(site_dir).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "govkit", &mut io::stdout());
            Ok(())
        }
    }
}
