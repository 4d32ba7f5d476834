use serde::Serialize;

use crate::format::ImageKind;

/// A named set of square icon resolutions and the container it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconPreset {
    pub name: String,
    pub sizes: Vec<u32>,
    pub format: ImageKind,
}

impl IconPreset {
    pub fn largest(&self) -> Option<u32> {
        self.sizes.iter().copied().max()
    }
}

pub struct BuiltinPreset {
    pub name: &'static str,
    pub sizes: &'static [u32],
    pub format: ImageKind,
}

pub const APPLE_ICON: &str = "Apple Icon";
pub const PROGRAM_ICON: &str = "Program Icon";
pub const WEBSITE_FAVICON: &str = "Website Favicon";

/// Preset picked when neither the command line nor the config names one.
pub const DEFAULT_PRESET: &str = PROGRAM_ICON;

pub const BUILTIN_PRESETS: &[BuiltinPreset] = &[
    BuiltinPreset {
        name: APPLE_ICON,
        sizes: &[16, 32, 48, 128, 256, 512, 1024],
        format: ImageKind::Icns,
    },
    BuiltinPreset {
        name: PROGRAM_ICON,
        sizes: &[16, 24, 32, 48, 64, 128, 256],
        format: ImageKind::Ico,
    },
    BuiltinPreset {
        name: WEBSITE_FAVICON,
        sizes: &[16, 32, 48, 64],
        format: ImageKind::Ico,
    },
];

impl BuiltinPreset {
    pub fn to_preset(&self) -> IconPreset {
        IconPreset {
            name: self.name.to_string(),
            sizes: self.sizes.to_vec(),
            format: self.format,
        }
    }
}

pub fn builtin(name: &str) -> Option<&'static BuiltinPreset> {
    BUILTIN_PRESETS.iter().find(|preset| preset.name == name)
}

pub fn builtin_presets() -> Vec<IconPreset> {
    BUILTIN_PRESETS.iter().map(BuiltinPreset::to_preset).collect()
}
