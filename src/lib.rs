pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod icon;
pub mod preset;
pub mod source;

pub use error::{Error, Result};
pub use format::ImageKind;
pub use source::ImageSource;
