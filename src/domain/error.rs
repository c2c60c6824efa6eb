use std::io;

use thiserror::Error;

/// Library-wide error type for modrules operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Module name is invalid.
    #[error("Invalid module name '{0}': must be non-empty and alphanumeric")]
    InvalidModuleName(String),

    /// The same module name was declared twice within one dependency set.
    #[error("Duplicate dependency '{0}' in one dependency set")]
    DuplicateDependency(String),

    /// Revision key is not one of the known build-rules revisions.
    #[error("Unknown revision '{name}': must be one of initial, d3d12")]
    UnknownRevision { name: String },

    /// Precompiled-header mode key is not recognized.
    #[error("Unknown PCH mode '{0}'")]
    UnknownPchMode(String),

    /// Target config file missing at the given path.
    #[error("Target config not found: {0}")]
    TargetConfigMissing(String),

    /// Invalid command-line input.
    #[error("{0}")]
    Validation(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidModuleName(_)
            | AppError::DuplicateDependency(_)
            | AppError::UnknownRevision { .. }
            | AppError::UnknownPchMode(_)
            | AppError::Validation(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::TargetConfigMissing(_) => io::ErrorKind::NotFound,
            AppError::Json(_) => io::ErrorKind::InvalidData,
        }
    }
}
