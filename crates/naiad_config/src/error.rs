//! Error types for design-file loading and validation.

/// Errors that can occur when loading or validating a design file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the design file.
    #[error("failed to read design file: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON content could not be parsed.
    #[error("failed to parse design file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A design value failed validation.
    #[error("invalid design: {0}")]
    Validation(String),
}
