use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::engine;
use crate::source::ImageSource;

pub fn run(cli: &Cli, input: &Path) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let source = ImageSource::open(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    let (width, height) = source
        .dimensions()
        .with_context(|| format!("Failed to read {}", input.display()))?;

    println!("{}", source.path().display().to_string().bold());
    println!("  Format:     {} ({})", source.kind(), source.extension());
    println!("  Dimensions: {}x{}", width, height);
    println!("  Size:       {} bytes", source.bytes().len());

    let targets: Vec<String> = engine::allowed_target_formats(source.kind())
        .into_iter()
        .map(|kind| kind.to_string())
        .collect();
    println!("  Convert to: {}", targets.join(", "));

    if !engine::is_valid_for_icon_packing(&source, None)? {
        println!(
            "{} Icons need equal width and height; this image is {}x{}.",
            "!".yellow(),
            width,
            height
        );
        return Ok(());
    }

    let usable = engine::available_presets(&source, &config.presets())?;
    if usable.is_empty() {
        println!("{} Source is too small for any icon preset.", "!".yellow());
        return Ok(());
    }

    println!("  Icon presets:");
    for preset in &usable {
        let sizes: Vec<String> = preset.sizes.iter().map(u32::to_string).collect();
        println!(
            "    {} {} ({}: {})",
            "✓".green(),
            preset.name,
            preset.format,
            sizes.join(", ")
        );
    }

    Ok(())
}
