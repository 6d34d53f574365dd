use thiserror::Error;

pub type Result<T, E = ErangelError> = std::result::Result<T, E>;

/// Unified error type covering decode, source and setup failures.
#[derive(Debug, Error)]
pub enum ErangelError {
    #[error("malformed telemetry input: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("{enumeration}: unknown value {value:?}")]
    UnknownEnumValue {
        enumeration: &'static str,
        value: String,
    },
    #[error("failed to read telemetry source: {0}")]
    ReadFailure(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("operational error: {0}")]
    Ops(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ErangelError {
    pub fn unknown_value(enumeration: &'static str, value: impl Into<String>) -> Self {
        ErangelError::UnknownEnumValue {
            enumeration,
            value: value.into(),
        }
    }
}
