// File: crates/barchart-core/src/error.rs
// Summary: Error type for the output backends.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures while turning a scene into pixels or files.
///
/// Malformed host data never produces one of these; it degrades to an empty
/// view-model instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("failed to create raster surface")]
    SurfaceCreation,

    #[error("encode PNG failed")]
    Encode,

    #[error("reading back surface pixels failed")]
    ReadPixels,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
