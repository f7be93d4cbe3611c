//! Error types for route chart rendering.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for chart composition.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Grid errors ===
    #[error("Grid axis '{axis}' of length {len} is not divisible by rebin factor {factor}")]
    InvalidRebinFactor {
        axis: &'static str,
        len: usize,
        factor: usize,
    },

    #[error("Row index {index} out of range for grid with {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Grid has no data")]
    EmptyGrid,

    // === Figure errors ===
    #[error("Panel index {index} out of range ({count} panels)")]
    PanelOutOfRange { index: usize, count: usize },

    #[error("Only {available} route colours available, asked for index {index}")]
    PaletteExhausted { index: usize, available: usize },

    // === Input errors ===
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    // === Rendering errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::InvalidGeoJson(err.to_string())
    }
}
