pub mod fetch_assets;
pub mod generate_samples;
pub mod scaffold_site;
pub mod template;
