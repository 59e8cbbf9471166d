use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawtickError>;

#[derive(Error, Debug)]
pub enum DrawtickError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Store operation '{operation}' gave up after {attempts} attempts")]
    Transient {
        operation: &'static str,
        attempts: u32,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DrawtickError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Busy or locked database, worth another attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            Self::Transient { .. } => true,
            _ => false,
        }
    }
}
