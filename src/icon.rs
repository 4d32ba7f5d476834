use std::io::Cursor;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};

use crate::error::{Error, Result};
use crate::format::ImageKind;

/// Largest side an ICO directory entry can describe.
pub const ICO_MAX_SIZE: u32 = 256;

/// Pixel sizes with a matching ICNS icon type.
pub const ICNS_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256, 512, 1024];

/// Whether a `size`x`size` image fits in a container of `kind`.
pub fn supports_size(kind: ImageKind, size: u32) -> bool {
    match kind {
        ImageKind::Ico => (1..=ICO_MAX_SIZE).contains(&size),
        ImageKind::Icns => ICNS_SIZES.contains(&size),
        _ => false,
    }
}

/// Encodes square variants into a single icon container, in the order given.
/// The first variant is the primary image.
pub fn encode_container(kind: ImageKind, variants: &[RgbaImage]) -> Result<Vec<u8>> {
    match kind {
        ImageKind::Ico => encode_ico(variants),
        ImageKind::Icns => encode_icns(variants),
        other => Err(Error::InvalidDestinationFormat(
            other.canonical_extension().to_string(),
        )),
    }
}

fn encode_ico(variants: &[RgbaImage]) -> Result<Vec<u8>> {
    let frames = variants
        .iter()
        .map(|img| {
            let (w, h) = img.dimensions();
            IcoFrame::as_png(img.as_raw(), w, h, ExtendedColorType::Rgba8)
        })
        .collect::<image::ImageResult<Vec<_>>>()
        .map_err(|e| Error::encode(ImageKind::Ico, e))?;

    let mut buf = Vec::new();
    IcoEncoder::new(Cursor::new(&mut buf))
        .encode_images(&frames)
        .map_err(|e| Error::encode(ImageKind::Ico, e))?;

    Ok(buf)
}

fn encode_icns(variants: &[RgbaImage]) -> Result<Vec<u8>> {
    let mut family = icns::IconFamily::new();
    for img in variants {
        let (w, h) = img.dimensions();
        let image = icns::Image::from_data(icns::PixelFormat::RGBA, w, h, img.as_raw().clone())
            .map_err(|e| Error::encode(ImageKind::Icns, e))?;
        family
            .add_icon(&image)
            .map_err(|e| Error::encode(ImageKind::Icns, e))?;
    }

    let mut buf = Vec::new();
    family
        .write(&mut buf)
        .map_err(|e| Error::encode(ImageKind::Icns, e))?;

    Ok(buf)
}
