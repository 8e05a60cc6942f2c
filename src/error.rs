use thiserror::Error;

/// Errors raised at the crate edge: configuration, I/O and payload decoding.
///
/// The normalization engine itself never returns these; malformed payload
/// contents degrade to defaults and diagnostics instead.
#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
