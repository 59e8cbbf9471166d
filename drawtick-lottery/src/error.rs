use thiserror::Error;

pub type Result<T> = std::result::Result<T, LotteryError>;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Store error: {0}")]
    Core(#[from] drawtick_core::DrawtickError),

    #[error("Unknown lottery type: {0}")]
    UnknownLottery(String),

    #[error("Invalid outcome: {0}")]
    Validation(String),

    #[error("Generator invariant violated: {0}")]
    GeneratorInvariant(String),

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LotteryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Validation failures from either layer, the store's included.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Core(drawtick_core::DrawtickError::Validation(_))
        )
    }
}
