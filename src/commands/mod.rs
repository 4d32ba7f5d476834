pub mod check;
pub mod convert;
pub mod formats;
pub mod icon;
pub mod info;
pub mod init;
pub mod presets;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::config::Config;
use crate::format::ImageKind;

/// Destination for `input` converted to `kind` when no explicit output was
/// given: `<output dir>/<stem><canonical extension>`.
pub fn default_output(config: &Config, input: &Path, kind: ImageKind) -> PathBuf {
    let dir = match &config.output.dir {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    dir.join(format!("{stem}{}", kind.canonical_extension()))
}

/// Refuses to replace an existing file unless overwriting was requested.
pub fn confirm_overwrite(config: &Config, destination: &Path, force: bool) -> Result<()> {
    if destination.exists() && !(force || config.output.overwrite) {
        bail!(
            "{} already exists. Pass --force to replace it.",
            destination.display()
        );
    }
    Ok(())
}
