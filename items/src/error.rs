//! Error types for the item model.

use std::fmt;

use crate::ItemId;

/// Result type for descriptor validation.
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Result type for group operations.
pub type GroupResult<T> = Result<T, GroupError>;

/// Errors from descriptor validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorError {
    /// A descriptor must carry a non-empty name.
    EmptyName,
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "descriptor name must not be empty"),
        }
    }
}

impl std::error::Error for DescriptorError {}

/// Errors from item group operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// No item is bound to this identifier.
    UnknownItem { id: ItemId },

    /// The supplied descriptor failed validation.
    InvalidDescriptor(DescriptorError),
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem { id } => {
                write!(f, "no item bound to id {}", id.raw())
            }
            Self::InvalidDescriptor(e) => write!(f, "invalid descriptor: {e}"),
        }
    }
}

impl std::error::Error for GroupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDescriptor(e) => Some(e),
            Self::UnknownItem { .. } => None,
        }
    }
}

impl From<DescriptorError> for GroupError {
    fn from(err: DescriptorError) -> Self {
        Self::InvalidDescriptor(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_item() {
        let err = GroupError::UnknownItem {
            id: ItemId::new(4097),
        };
        let msg = err.to_string();
        assert!(msg.contains("4097"), "should mention the id");
    }

    #[test]
    fn display_invalid_descriptor() {
        let err = GroupError::InvalidDescriptor(DescriptorError::EmptyName);
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn source_for_wrapped_descriptor_error() {
        let err = GroupError::InvalidDescriptor(DescriptorError::EmptyName);
        assert!(std::error::Error::source(&err).is_some());
        let err = GroupError::UnknownItem { id: ItemId::new(1) };
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn from_descriptor_error() {
        let err: GroupError = DescriptorError::EmptyName.into();
        assert!(matches!(err, GroupError::InvalidDescriptor(_)));
    }
}
