use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;

pub fn run(cli: &Cli) -> Result<()> {
    if !cli.config.exists() {
        println!(
            "{} No config found at {}. Using defaults; run `imagetool init` to create one.",
            "!".yellow(),
            cli.config.display()
        );
        return Ok(());
    }

    let config = Config::load(&cli.config)?;
    println!("{} Config is valid ({})", "✓".green(), cli.config.display());

    match &config.output.dir {
        Some(dir) if !dir.is_dir() => println!(
            "{} Output directory does not exist: {}",
            "!".yellow(),
            dir.display()
        ),
        Some(dir) => println!("  Output directory: {}", dir.display()),
        None => println!("  Output directory: next to the source image"),
    }
    println!("  Default preset: {}", config.icons.preset);

    for (name, preset) in &config.icons.presets {
        let sizes: Vec<String> = preset.sizes.iter().map(u32::to_string).collect();
        println!(
            "  Custom preset '{}': {} ({})",
            name,
            sizes.join(", "),
            preset.format
        );
    }

    Ok(())
}
