//! Error types for raster surface and font construction.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid hex color {0:?} (expected #rrggbb or #rgb)")]
    InvalidColor(String),

    #[error("failed to parse font data: {0}")]
    FontLoad(String),

    #[error("failed to read font file {path:?}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type CanvasResult<T> = Result<T, CanvasError>;
