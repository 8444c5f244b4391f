use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Package `{0}` is not part of the indexed package set")]
    PackageNotIndexed(String),

    #[error("Package `{0}` cannot be paired with itself, use its self results")]
    SelfPair(String),

    #[error("Compatibility store error: {0}")]
    StoreError(String),

    #[error("Deprecated dependency lookup failed: {0}")]
    DeprecatedDepsError(String),

    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid snapshot in `{0}`")]
    InvalidSnapshot(PathBuf),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    DeserializationError(#[from] toml::de::Error),
}

impl DashboardError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn store<S: Into<String>>(msg: S) -> Self {
        Self::StoreError(msg.into())
    }

    pub fn render<S: Into<String>>(msg: S) -> Self {
        Self::RenderError(msg.into())
    }
}
