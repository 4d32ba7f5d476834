use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Every image format the tool knows about. Icon containers (ICO, ICNS) can
/// be written but never loaded as a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Png,
    Ico,
    Icns,
    Webp,
    #[value(alias = "jpg")]
    #[serde(alias = "jpg")]
    Jpeg,
    Bmp,
}

impl ImageKind {
    /// Registry order. Menus and listings follow it.
    pub const ALL: [ImageKind; 6] = [
        ImageKind::Png,
        ImageKind::Ico,
        ImageKind::Icns,
        ImageKind::Webp,
        ImageKind::Jpeg,
        ImageKind::Bmp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ImageKind::Png => "PNG",
            ImageKind::Ico => "ICO",
            ImageKind::Icns => "ICNS",
            ImageKind::Webp => "WEBP",
            ImageKind::Jpeg => "JPEG",
            ImageKind::Bmp => "BMP",
        }
    }

    /// Dot-prefixed extensions, canonical one first.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ImageKind::Png => &[".png"],
            ImageKind::Ico => &[".ico"],
            ImageKind::Icns => &[".icns"],
            ImageKind::Webp => &[".webp"],
            ImageKind::Jpeg => &[".jpg", ".jpeg"],
            ImageKind::Bmp => &[".bmp"],
        }
    }

    pub fn canonical_extension(self) -> &'static str {
        self.extensions()[0]
    }

    /// Looks up a normalized (lowercase, dot-prefixed) extension.
    pub fn from_extension(extension: &str) -> Option<ImageKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extensions().contains(&extension))
    }

    pub fn is_icon(self) -> bool {
        matches!(self, ImageKind::Ico | ImageKind::Icns)
    }

    /// Codec used by the `image` crate. ICNS has none there and is written
    /// through the `icns` crate instead.
    pub fn image_format(self) -> Option<image::ImageFormat> {
        match self {
            ImageKind::Png => Some(image::ImageFormat::Png),
            ImageKind::Ico => Some(image::ImageFormat::Ico),
            ImageKind::Icns => None,
            ImageKind::Webp => Some(image::ImageFormat::WebP),
            ImageKind::Jpeg => Some(image::ImageFormat::Jpeg),
            ImageKind::Bmp => Some(image::ImageFormat::Bmp),
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized extension of `path`: everything after the last `.` of the
/// lowercased path, prefixed with `.`. A path without any dot yields the
/// whole lowercased path, which never matches the registry.
pub fn normalized_extension(path: &Path) -> String {
    let lowered = path.to_string_lossy().to_lowercase();
    let tail = lowered.rsplit('.').next().unwrap_or_default();
    format!(".{tail}")
}

/// Registry kind of `path`, if its extension is known.
pub fn kind_of(path: &Path) -> Option<ImageKind> {
    ImageKind::from_extension(&normalized_extension(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lists_are_disjoint() {
        let mut seen = Vec::new();
        for kind in ImageKind::ALL {
            for ext in kind.extensions() {
                assert!(!seen.contains(ext), "{ext} listed twice");
                seen.push(*ext);
            }
        }
    }

    #[test]
    fn normalizes_uppercase_and_last_dot() {
        assert_eq!(normalized_extension(Path::new("Photo.Final.JPEG")), ".jpeg");
        assert_eq!(normalized_extension(Path::new("noext")), ".noext");
    }
}
