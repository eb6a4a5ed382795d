use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewLensError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Unknown classification dimension: {0}")]
    UnknownDimension(String),

    #[error("Invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReviewLensError>;
