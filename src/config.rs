use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::format::ImageKind;
use crate::preset::{self, IconPreset};

pub const CONFIG_NAME: &str = "imagetool.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "OutputConfig::is_default")]
    pub output: OutputConfig,

    #[serde(default, skip_serializing_if = "IconsConfig::is_default")]
    pub icons: IconsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory for converted files when no explicit output path is given.
    /// Relative paths are resolved against the config file's directory.
    /// Defaults to the source image's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Replace existing files without asking for `--force`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overwrite: bool,
}

impl OutputConfig {
    fn is_default(&self) -> bool {
        self.dir.is_none() && !self.overwrite
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct IconsConfig {
    /// Preset used by `icon` when none is given (default: "Program Icon")
    #[serde(default = "default_preset")]
    pub preset: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub presets: BTreeMap<String, PresetConfig>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            presets: BTreeMap::new(),
        }
    }
}

impl IconsConfig {
    fn is_default(&self) -> bool {
        self.preset == preset::DEFAULT_PRESET && self.presets.is_empty()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PresetConfig {
    pub sizes: Vec<u32>,
    #[serde(default = "default_icon_format")]
    pub format: ImageKind,
}

fn default_preset() -> String {
    preset::DEFAULT_PRESET.to_string()
}

fn default_icon_format() -> ImageKind {
    ImageKind::Ico
}

impl Config {
    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.validate_presets()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        if let Some(dir) = &config.output.dir {
            if dir.is_relative() {
                config.output.dir = Some(config_dir.join(dir));
            }
        }

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn validate_presets(&self) -> Result<()> {
        for (name, preset) in &self.icons.presets {
            if preset::builtin(name).is_some() {
                bail!("Preset '{}': shadows a built-in preset", name);
            }
            if preset.sizes.is_empty() {
                bail!("Preset '{}': no sizes given", name);
            }
            if preset.sizes.contains(&0) {
                bail!("Preset '{}': sizes must be positive", name);
            }
            if !preset.format.is_icon() {
                bail!(
                    "Preset '{}': format must be ico or icns, got {}",
                    name,
                    preset.format
                );
            }
        }
        if self.preset(&self.icons.preset).is_none() {
            bail!("Default preset '{}' does not exist", self.icons.preset);
        }
        Ok(())
    }

    /// Built-in presets followed by the configured ones.
    pub fn presets(&self) -> Vec<IconPreset> {
        let mut presets = preset::builtin_presets();
        presets.extend(self.icons.presets.iter().map(|(name, preset)| IconPreset {
            name: name.clone(),
            sizes: preset.sizes.clone(),
            format: preset.format,
        }));
        presets
    }

    pub fn preset(&self, name: &str) -> Option<IconPreset> {
        self.presets().into_iter().find(|preset| preset.name == name)
    }

    pub fn default_template() -> String {
        r#"# imagetool configuration

# Output settings
# [output]
# dir = "converted"      # Where converted files go (default: next to the source)
# overwrite = false      # Replace existing files without --force

# Icon settings
# [icons]
# preset = "Program Icon"   # Default preset for `imagetool icon`
#
# Built-in presets:
#   "Apple Icon"       16, 32, 48, 128, 256, 512, 1024  (icns)
#   "Program Icon"     16, 24, 32, 48, 64, 128, 256     (ico)
#   "Website Favicon"  16, 32, 48, 64                   (ico)

# Custom presets
# [icons.presets."Tray Icon"]
# sizes = [16, 24, 32]
# format = "ico"            # "ico" (default) or "icns"
"#
        .to_string()
    }
}
