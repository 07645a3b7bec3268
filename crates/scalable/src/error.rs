//! Application error types

use std::io;

use scalable_layout::LayoutError;
use thiserror::Error;

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

/// Application errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Invalid {name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },
}

impl AppError {
    pub fn invalid_argument(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument { name, value: value.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = AppError::invalid_argument("width", "wide");
        assert_eq!(format!("{}", err), "Invalid width: \"wide\"");
    }

    #[test]
    fn test_layout_error_is_transparent() {
        let err = AppError::from(LayoutError::invalid_configuration("unrecognized base orientation 3"));
        assert_eq!(format!("{}", err), "Invalid configuration: unrecognized base orientation 3");
    }
}
