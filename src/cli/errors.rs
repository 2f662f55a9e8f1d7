use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid clim parameter: {clim}. Must be 'auto', a percentage or 'low,high'")]
    InvalidClim { clim: String },

    #[error("Delimiter must be a single ASCII character, got: {delimiter:?}")]
    InvalidDelimiter { delimiter: char },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Preview(#[from] pltpreview::Error),
}
