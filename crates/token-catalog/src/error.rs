//! Error types for token validation.
//!
//! Absence of a token during lookup is not an error; it is the `None` arm of
//! an [`Option`]. The only failure the catalog itself can produce is a
//! type/value shape mismatch at the untyped boundary.

use thiserror::Error;

use crate::model::TokenType;

/// Error during token shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value does not have the shape its declared type requires.
    #[error("type/value mismatch for `{token_type}`: expected {expected}, got {actual}")]
    TypeValueMismatch {
        /// The declared token type.
        token_type: TokenType,
        /// The shape the declared type requires.
        expected: &'static str,
        /// The shape actually found.
        actual: String,
    },
}
