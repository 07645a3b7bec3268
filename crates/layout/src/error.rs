//! Layout error types

use thiserror::Error;

/// Layout operation result type
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Layout errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl LayoutError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::invalid_configuration("unrecognized base orientation 7");
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: unrecognized base orientation 7"
        );
    }
}
