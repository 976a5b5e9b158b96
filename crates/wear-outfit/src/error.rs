//! Outfit payload error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutfitError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl OutfitError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Received an unexpected outfit response. Please try again.",
            Self::InvalidPayload(_) => "The outfit forecast is incomplete. Please refresh.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_conversion() {
        let err: OutfitError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, OutfitError::Parse(_)));
        assert!(err.user_message().contains("unexpected"));
    }
}
