use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use crate::error::{Error, Result};
use crate::format::{normalized_extension, ImageKind};

/// A validated source image held in memory.
///
/// The file is read once when the source is opened. Selecting another file
/// means opening a new `ImageSource`; an existing one never changes.
#[derive(Debug, Clone)]
pub struct ImageSource {
    path: PathBuf,
    kind: ImageKind,
    extension: String,
    bytes: Vec<u8>,
}

impl ImageSource {
    /// Loads the image at `path`.
    ///
    /// Fails with [`Error::Access`] when the path is not a readable regular
    /// file, [`Error::UnsupportedFormat`] when its extension is not in the
    /// registry, and [`Error::UnconvertibleSource`] for ICO/ICNS files.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::Access(path.to_path_buf()));
        }
        let mut file = File::open(path).map_err(|_| Error::Access(path.to_path_buf()))?;

        let extension = normalized_extension(path);
        let kind = ImageKind::from_extension(&extension)
            .ok_or_else(|| Error::UnsupportedFormat(extension.clone()))?;
        if kind.is_icon() {
            return Err(Error::UnconvertibleSource(path.to_path_buf()));
        }

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|_| Error::Access(path.to_path_buf()))?;

        Ok(Self {
            path: path.to_path_buf(),
            kind,
            extension,
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    /// Lowercase, dot-prefixed extension the source was loaded with.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Width and height read from the image header, without decoding pixels.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        self.reader()?.into_dimensions().map_err(Error::Decode)
    }

    pub fn decode(&self) -> Result<DynamicImage> {
        self.reader()?.decode().map_err(Error::Decode)
    }

    // The extension is only a hint; the content decides which codec runs.
    fn reader(&self) -> Result<ImageReader<Cursor<&[u8]>>> {
        let cursor = Cursor::new(self.bytes.as_slice());
        let reader = match self.kind.image_format() {
            Some(format) => ImageReader::with_format(cursor, format),
            None => ImageReader::new(cursor),
        };
        Ok(reader.with_guessed_format()?)
    }
}
