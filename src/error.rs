//! Errors returned by the conversion core.
//!
//! Every failure is handed back to the caller unchanged. Nothing in the core
//! logs, retries or swallows an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::ImageKind;

#[derive(Error, Debug)]
pub enum Error {
    /// Source path is missing, not a regular file, or unreadable.
    #[error("cannot read source image: {}", .0.display())]
    Access(PathBuf),

    /// Destination directory is missing or not writable.
    #[error("destination directory is missing or not writable: {}", .0.display())]
    DestinationAccess(PathBuf),

    #[error("unrecognized file extension: {0}")]
    UnsupportedFormat(String),

    /// Icon containers are terminal; they are never loaded as a source.
    #[error("{} is an icon file; nothing can be converted from it", .0.display())]
    UnconvertibleSource(PathBuf),

    #[error("invalid destination extension: {0}")]
    InvalidDestinationFormat(String),

    #[error("no output resolutions were provided")]
    NoResolutions,

    #[error("icon resolutions must be positive, got {0}")]
    InvalidResolution(u32),

    #[error("source dimensions are invalid: got {actual} when {required} was required")]
    InvalidIconDimensions { actual: u32, required: u32 },

    #[error("{kind} containers cannot hold a {size}x{size} image")]
    UnsupportedIconSize { kind: ImageKind, size: u32 },

    #[error("failed to decode source image")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode {kind} image")]
    Encode {
        kind: ImageKind,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// True for both source and destination access failures.
    pub fn is_access(&self) -> bool {
        matches!(self, Error::Access(_) | Error::DestinationAccess(_))
    }

    pub(crate) fn encode(kind: ImageKind, err: impl Into<EncodeFailure>) -> Self {
        Error::Encode {
            kind,
            source: err.into().0,
        }
    }
}

/// Normalizes the error types of the two encoding backends.
pub(crate) struct EncodeFailure(io::Error);

impl From<io::Error> for EncodeFailure {
    fn from(err: io::Error) -> Self {
        EncodeFailure(err)
    }
}

impl From<image::ImageError> for EncodeFailure {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(err) => EncodeFailure(err),
            other => EncodeFailure(io::Error::other(other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
