use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CONFIG_NAME;
use crate::format::ImageKind;

#[derive(Parser)]
#[command(
    name = "imagetool",
    about = "Convert bitmap images between formats and pack them into multi-resolution icons"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, default_value = CONFIG_NAME)]
    pub config: PathBuf,

    /// Print debug diagnostics (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a commented imagetool.toml template
    Init,

    /// Validate the config file
    Check,

    /// List supported image formats and their extensions
    Formats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List icon size presets
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what can be done with an image
    Info {
        /// Source image
        input: PathBuf,
    },

    /// Convert an image to another bitmap format
    Convert {
        /// Source image
        input: PathBuf,

        /// Target format (required unless --output is given)
        #[arg(long, required_unless_present = "output")]
        to: Option<ImageKind>,

        /// Destination file; its extension selects the format
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the destination if it exists
        #[arg(long)]
        force: bool,
    },

    /// Pack an image into a multi-resolution icon (.ico or .icns)
    Icon {
        /// Source image (must be square)
        input: PathBuf,

        /// Size preset (see `imagetool presets`)
        #[arg(long, conflicts_with = "sizes")]
        preset: Option<String>,

        /// Explicit sizes (comma-separated)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<u32>>,

        /// Destination file; its extension selects the container
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the destination if it exists
        #[arg(long)]
        force: bool,
    },
}
