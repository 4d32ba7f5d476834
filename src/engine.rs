//! Conversion and icon packing.
//!
//! Every operation takes the [`ImageSource`] explicitly. Destinations are
//! validated (directory first, then extension) before anything is decoded.
//! Output is staged in a temporary file next to the destination and renamed
//! into place, so a failed write never leaves a truncated file behind.

use std::io::{Cursor, Write};
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::format::{normalized_extension, ImageKind};
use crate::icon;
use crate::preset::IconPreset;
use crate::source::ImageSource;

/// Resampling used for icon variants. Catmull-Rom is the bicubic kernel.
pub const ICON_FILTER: FilterType = FilterType::CatmullRom;

/// Non-icon formats a source of kind `excluding` can be converted to.
pub fn allowed_target_formats(excluding: ImageKind) -> Vec<ImageKind> {
    ImageKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_icon() && *kind != excluding)
        .collect()
}

fn bitmap_formats() -> Vec<ImageKind> {
    ImageKind::ALL.into_iter().filter(|kind| !kind.is_icon()).collect()
}

/// Containers accepted by [`pack_icon`].
pub fn icon_formats() -> Vec<ImageKind> {
    ImageKind::ALL.into_iter().filter(|kind| kind.is_icon()).collect()
}

/// Converts `source` to the bitmap format implied by `destination`'s
/// extension and writes it, replacing any existing file.
pub fn convert(source: &ImageSource, destination: &Path) -> Result<()> {
    let staged = stage_destination(destination)?;
    let target = check_destination_kind(source, destination, &bitmap_formats())?;
    let format = target
        .image_format()
        .ok_or_else(|| Error::InvalidDestinationFormat(normalized_extension(destination)))?;

    let image = prepare_for(target, source.decode()?);

    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(|e| Error::encode(target, e))?;

    commit(staged, destination, &buf)
}

/// Whether `source` can be packed into an icon: it must be square and, when
/// `minimum_size` is given, at least that large.
pub fn is_valid_for_icon_packing(source: &ImageSource, minimum_size: Option<u32>) -> Result<bool> {
    let (width, height) = source.dimensions()?;
    if width != height {
        return Ok(false);
    }
    Ok(minimum_size.map_or(true, |min| width >= min))
}

/// Resizes `source` to every resolution and writes them into one ICO or ICNS
/// container at `destination`, largest first.
///
/// Repeated resolutions are written once. Returns the sizes in the order
/// they were stored.
pub fn pack_icon(source: &ImageSource, destination: &Path, resolutions: &[u32]) -> Result<Vec<u32>> {
    let staged = stage_destination(destination)?;
    if resolutions.is_empty() {
        return Err(Error::NoResolutions);
    }
    let target = check_destination_kind(source, destination, &icon_formats())?;

    let sizes = descending_unique(resolutions);
    if sizes.contains(&0) {
        return Err(Error::InvalidResolution(0));
    }

    let required = sizes[0];
    if !is_valid_for_icon_packing(source, Some(required))? {
        let (width, height) = source.dimensions()?;
        return Err(Error::InvalidIconDimensions {
            actual: width.max(height),
            required,
        });
    }
    if let Some(&size) = sizes.iter().find(|&&size| !icon::supports_size(target, size)) {
        return Err(Error::UnsupportedIconSize { kind: target, size });
    }

    let image = source.decode()?;
    let variants: Vec<RgbaImage> = sizes
        .iter()
        .map(|&size| image.resize_exact(size, size, ICON_FILTER).to_rgba8())
        .collect();

    let buf = icon::encode_container(target, &variants)?;
    commit(staged, destination, &buf)?;

    Ok(sizes)
}

/// Presets whose largest resolution `source` can satisfy.
pub fn available_presets(source: &ImageSource, presets: &[IconPreset]) -> Result<Vec<IconPreset>> {
    if !is_valid_for_icon_packing(source, None)? {
        return Ok(Vec::new());
    }
    let mut usable = Vec::new();
    for preset in presets {
        if is_valid_for_icon_packing(source, preset.largest())? {
            usable.push(preset.clone());
        }
    }
    Ok(usable)
}

/// Creates the staging file for `destination` in its parent directory (the
/// current directory when there is none). Failing to create it is what makes
/// a directory count as missing or unwritable.
fn stage_destination(destination: &Path) -> Result<NamedTempFile> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(Error::DestinationAccess(dir.to_path_buf()));
    }
    NamedTempFile::new_in(dir).map_err(|_| Error::DestinationAccess(dir.to_path_buf()))
}

fn commit(mut staged: NamedTempFile, destination: &Path, buf: &[u8]) -> Result<()> {
    staged.write_all(buf)?;
    staged.flush()?;
    staged.persist(destination).map_err(|e| e.error)?;
    Ok(())
}

fn check_destination_kind(
    source: &ImageSource,
    destination: &Path,
    allowed: &[ImageKind],
) -> Result<ImageKind> {
    let extension = normalized_extension(destination);
    match ImageKind::from_extension(&extension) {
        Some(kind) if extension != source.extension() && allowed.contains(&kind) => Ok(kind),
        _ => Err(Error::InvalidDestinationFormat(extension)),
    }
}

// JPEG has no alpha channel. The other encoders besides PNG only take 8-bit
// RGB(A).
fn prepare_for(target: ImageKind, image: DynamicImage) -> DynamicImage {
    match (target, image) {
        (ImageKind::Jpeg, image) => DynamicImage::ImageRgb8(image.to_rgb8()),
        (ImageKind::Png, image) => image,
        (_, image @ (DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_))) => image,
        (_, image) if image.color().has_alpha() => DynamicImage::ImageRgba8(image.to_rgba8()),
        (_, image) => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

fn descending_unique(resolutions: &[u32]) -> Vec<u32> {
    let mut sizes = resolutions.to_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_sorted_descending_without_repeats() {
        assert_eq!(descending_unique(&[16, 256, 32, 256, 16]), vec![256, 32, 16]);
    }

    #[test]
    fn targets_exclude_icons_and_source() {
        let targets = allowed_target_formats(ImageKind::Png);
        assert_eq!(
            targets,
            vec![ImageKind::Webp, ImageKind::Jpeg, ImageKind::Bmp]
        );
    }

    #[test]
    fn same_format_other_extension_is_a_bitmap_target() {
        assert!(bitmap_formats().contains(&ImageKind::Jpeg));
        assert!(!bitmap_formats().contains(&ImageKind::Ico));
    }

    #[test]
    fn jpeg_output_drops_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        assert!(!prepare_for(ImageKind::Jpeg, img).color().has_alpha());
    }

    #[test]
    fn webp_output_widens_grayscale() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::new(2, 2));
        assert_eq!(
            prepare_for(ImageKind::Webp, img).color(),
            image::ColorType::Rgb8
        );
    }
}
