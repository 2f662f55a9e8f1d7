//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, JSON, CSV, array shape and image decoding errors, and
//! provides semantic variants for argument validation and display failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[cfg(feature = "gui")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("No finite samples to display")]
    EmptyData,

    #[error("No histogram bin lies inside the {percentile}% clip window")]
    EmptyClipWindow { percentile: f64 },

    #[error("Series length mismatch: x has {x} values, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("Unsupported channel count: {channels} (expected 3 or 4)")]
    UnsupportedChannels { channels: usize },

    #[error("GUI support is not compiled in; rebuild with --features gui")]
    GuiUnavailable,

    #[error("Display error: {0}")]
    Display(String),
}

impl Error {
    pub fn display<E: std::fmt::Display>(e: E) -> Self {
        Error::Display(e.to_string())
    }

    pub(crate) fn invalid(arg: &'static str, value: impl ToString) -> Self {
        Error::InvalidArgument {
            arg,
            value: value.to_string(),
        }
    }
}
