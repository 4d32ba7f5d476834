use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::format::ImageKind;

#[derive(Serialize)]
struct FormatEntry {
    format: ImageKind,
    name: &'static str,
    extensions: &'static [&'static str],
    icon: bool,
}

pub fn run(json: bool) -> Result<()> {
    let entries: Vec<FormatEntry> = ImageKind::ALL
        .into_iter()
        .map(|kind| FormatEntry {
            format: kind,
            name: kind.name(),
            extensions: kind.extensions(),
            icon: kind.is_icon(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Formats".bold());
    println!("{:<8} {:<20} Usage", "Name", "Extensions");
    println!("{}", "-".repeat(50));
    for entry in &entries {
        let usage = if entry.icon {
            "icon output only"
        } else {
            "source and output"
        };
        println!(
            "{:<8} {:<20} {}",
            entry.name,
            entry.extensions.join(", "),
            usage
        );
    }

    Ok(())
}
