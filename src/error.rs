use thiserror::Error;

/// Unified error type for apk-namer operations
#[derive(Error, Debug)]
pub enum ApkNamerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Rename hook failed: {0}")]
    Hook(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] log::SetLoggerError),
}

/// Convenience type alias for Results in apk-namer
pub type Result<T> = std::result::Result<T, ApkNamerError>;

impl ApkNamerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ApkNamerError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ApkNamerError::Version(msg.into())
    }

    /// Create a rename hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        ApkNamerError::Hook(msg.into())
    }
}
