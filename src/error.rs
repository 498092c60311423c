//! Error types for icon generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating the icon
#[derive(Error, Debug)]
pub enum Error {
    /// The preferred font was not found in any search location
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// The font file exists but could not be read or parsed
    #[error("Failed to load font {}: {reason}", .path.display())]
    FontLoad { path: PathBuf, reason: String },

    /// The directory the icon should be written into does not exist
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// Encoding the canvas as an ICO failed
    #[error("Failed to encode icon: {0}")]
    Encode(#[source] io::Error),

    /// Creating or writing the output file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

