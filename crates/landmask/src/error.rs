//! Error types and result alias for the crate.
//!
//! Two failure kinds are terminal for a run: an input raster that cannot be
//! decoded, and an output path that cannot be written. Everything else the
//! pipelines can reject is configuration, caught up front by `validate()`.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to decode image '{}'", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
