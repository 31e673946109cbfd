//! Build command - generates the static site

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::{Config, ThemeMode};
use folio_generator::Builder;

use super::check::quick_validate;

/// Resolve a configured directory against the config file location.
pub(crate) fn site_path(config_path: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| dir.to_path_buf(), |root| root.join(dir))
}

/// Run the build command.
///
/// Builds the site from markdown posts to the output directory.
pub fn run(
    config_path: &Path,
    output: Option<&Path>,
    drafts: bool,
    theme: Option<ThemeMode>,
) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, drafts, ?theme, "Starting build");

    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    let warnings = quick_validate(&config);
    if !warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    if drafts {
        config.build.drafts = true;
    }

    let content_dir = site_path(config_path, &config.build.content_dir);
    let output_dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => site_path(config_path, &config.build.output_dir),
    };

    tracing::debug!(?config, "Loaded configuration");

    let stats = Builder::new(config, &content_dir, &output_dir)
        .with_theme(theme)
        .build()
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:    {}", stats.pages);
    println!("  Drafts:   {} skipped", stats.drafts_skipped);
    println!("  Failed:   {}", stats.failed);
    println!();
    println!("  Duration: {:.2}s", duration.as_secs_f64());
    println!("  Output:   {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
