use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;

pub fn run(cli: &Cli, json: bool) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let presets = config.presets();

    if json {
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    println!("{}", "Icon Presets".bold());
    println!("{:<20} {:<8} Sizes", "Name", "Format");
    println!("{}", "-".repeat(60));
    for preset in &presets {
        let sizes: Vec<String> = preset.sizes.iter().map(u32::to_string).collect();
        let marker = if preset.name == config.icons.preset {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<20} {:<8} {}{}",
            preset.name,
            preset.format.to_string(),
            sizes.join(", "),
            marker
        );
    }

    Ok(())
}
