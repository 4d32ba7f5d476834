use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::commands::{confirm_overwrite, default_output};
use crate::config::Config;
use crate::engine;
use crate::format::kind_of;
use crate::source::ImageSource;

pub fn run(
    cli: &Cli,
    input: &Path,
    preset: Option<String>,
    sizes: Option<Vec<u32>>,
    output: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let source = ImageSource::open(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let preset_name = preset.unwrap_or_else(|| config.icons.preset.clone());
    let preset = config
        .preset(&preset_name)
        .ok_or_else(|| anyhow!("Unknown preset '{}'. See `imagetool presets`.", preset_name))?;

    let (resolutions, label) = match sizes {
        Some(sizes) => (sizes, "custom sizes".to_string()),
        None => (preset.sizes.clone(), format!("preset '{}'", preset.name)),
    };

    // An explicit output's extension decides the container; without one the
    // preset's container is used.
    let destination = match output {
        Some(path) => path,
        None => default_output(&config, input, preset.format),
    };
    debug!(
        destination = %destination.display(),
        container = ?kind_of(&destination),
        ?resolutions,
        "packing icon"
    );

    confirm_overwrite(&config, &destination, force)?;
    let written = engine::pack_icon(&source, &destination, &resolutions)
        .with_context(|| format!("Failed to write icon {}", destination.display()))?;
    info!(destination = %destination.display(), sizes = ?written, "icon written");

    let written: Vec<String> = written.iter().map(u32::to_string).collect();
    println!(
        "{} Packed {} ({}) into {}",
        "✓".green(),
        input.display(),
        label,
        destination.display()
    );
    println!("  Sizes: {}", written.join(", "));
    Ok(())
}
