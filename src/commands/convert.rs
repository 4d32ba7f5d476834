use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::commands::{confirm_overwrite, default_output};
use crate::config::Config;
use crate::engine;
use crate::format::ImageKind;
use crate::source::ImageSource;

pub fn run(
    cli: &Cli,
    input: &Path,
    to: Option<ImageKind>,
    output: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let source = ImageSource::open(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    if let Some(kind) = to {
        if kind.is_icon() {
            bail!("{} is an icon container; use `imagetool icon` instead", kind);
        }
    }

    let destination = match (output, to) {
        (Some(path), _) => path,
        (None, Some(kind)) => default_output(&config, input, kind),
        (None, None) => bail!("Either --to or --output is required"),
    };
    debug!(source = %input.display(), destination = %destination.display(), "converting");

    confirm_overwrite(&config, &destination, force)?;
    engine::convert(&source, &destination)
        .with_context(|| format!("Failed to convert to {}", destination.display()))?;
    info!(destination = %destination.display(), "conversion written");

    println!(
        "{} Converted {} -> {}",
        "✓".green(),
        input.display(),
        destination.display()
    );
    Ok(())
}
