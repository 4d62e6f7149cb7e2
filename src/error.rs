use thiserror::Error;

/// Errors that can occur while setting up the parser or driving a batch.
///
/// Individual ingredient lines never produce an `Err`: unparsable lines are
/// recovered in place and surface as a diagnostic flag on the output record.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read the recipe corpus
    #[error("Failed to read corpus: {0}")]
    IoError(#[from] std::io::Error),

    /// Corpus file is not valid JSON
    #[error("Failed to decode corpus: {0}")]
    JsonError(#[from] serde_json::Error),
}
