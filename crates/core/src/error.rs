//! Error type for the tire calculators
//!
//! Every calculator is total over its numeric inputs. The only failure is a
//! linear-unit tag that is neither `"inch"` nor `"cm"`, which is rejected when
//! the tag is parsed into a [`LinearUnit`](crate::core_types::LinearUnit).

use thiserror::Error;

/// Errors raised by the calculators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A unit tag outside the recognized set.
    ///
    /// The message text is part of the public contract and must stay exactly
    /// `"Invalid unit"`. The rejected tag is kept for diagnostics only.
    #[error("Invalid unit")]
    InvalidUnit {
        /// The tag that failed to parse
        tag: String,
    },
}

impl CalcError {
    /// Create an `InvalidUnit` error for the given tag.
    pub fn invalid_unit(tag: impl Into<String>) -> Self {
        Self::InvalidUnit { tag: tag.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_unit_message_is_exact() {
        let err = CalcError::invalid_unit("furlong");
        assert_eq!(err.to_string(), "Invalid unit");
    }

    #[test]
    fn test_invalid_unit_keeps_tag() {
        let CalcError::InvalidUnit { tag } = CalcError::invalid_unit("mm");
        assert_eq!(tag, "mm");
    }
}
