use thiserror::Error;

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reject values that are NaN, infinite, or not strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> ViewResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ViewError::InvalidArgument(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

pub(crate) fn require_finite(name: &str, value: f64) -> ViewResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ViewError::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
