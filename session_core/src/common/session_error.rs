use thiserror::Error;

/// Errors raised while building configuration or bar data.
///
/// Rendering never fails; a missing session range is a normal no-op.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("PARA_ERROR: {key}: {msg}")]
    InvalidParameter { key: String, msg: String },

    #[error("PARA_ERROR: unknown para = {0}")]
    UnknownParameter(String),

    #[error("KL_DATA_INVALID: bar {index}: {msg}")]
    InvalidBar { index: usize, msg: String },

    #[error("KL_NOT_MONOTONOUS: bar {index} does not open after its predecessor")]
    NotMonotonous { index: usize },

    #[error("CONFIG_ERROR: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    pub fn invalid_parameter(key: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.into(),
            msg: msg.into(),
        }
    }

    /// True for errors caused by the bar source rather than configuration
    pub fn is_bar_data_err(&self) -> bool {
        matches!(self, Self::InvalidBar { .. } | Self::NotMonotonous { .. })
    }
}
