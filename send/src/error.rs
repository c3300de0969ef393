//! Error types for the send side.

use std::fmt;

use crate::flavour::FlavourError;

/// Result type for send-side operations.
pub type SendResult<T> = Result<T, SendError>;

/// Errors from send-side configuration and mode parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// An inclusion mode string was not one of `stale`, `all`, `none`.
    InvalidMode { given: String },

    /// Flavour validation failed.
    Flavour(FlavourError),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMode { given } => {
                write!(f, "mode must be one of stale, all, none; got {given:?}")
            }
            Self::Flavour(e) => write!(f, "flavour error: {e}"),
        }
    }
}

impl std::error::Error for SendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Flavour(e) => Some(e),
            Self::InvalidMode { .. } => None,
        }
    }
}

impl From<FlavourError> for SendError {
    fn from(err: FlavourError) -> Self {
        Self::Flavour(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_mode() {
        let err = SendError::InvalidMode {
            given: "bogus".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("stale"));
    }

    #[test]
    fn from_flavour_error() {
        let err: SendError = FlavourError::InvalidAddressBits { bits: 7 }.into();
        assert!(matches!(err, SendError::Flavour(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_equality() {
        let a = SendError::InvalidMode {
            given: "x".to_string(),
        };
        let b = SendError::InvalidMode {
            given: "x".to_string(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SendError>();
    }
}
