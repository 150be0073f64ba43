//! Shape validation for token values.
//!
//! The sum type makes a mismatched value unrepresentable once constructed;
//! this module covers the untyped boundary, where a declared type tag and a
//! candidate value arrive separately (imports, store snapshots). Validation
//! is a pure function and never mutates its input.

use crate::error::ValidationError;
use crate::model::{Token, TokenType, TokenValue};

/// Verifies that `value` has the shape `token_type` dictates.
///
/// Covers all 8 types with no silently-accepting fallthrough: the check is
/// the variant tag projected by [`TokenValue::token_type`], plus the
/// fine-grained rules of [`TokenValue::is_well_formed`] (a font-family
/// fallback list must be non-empty).
pub fn validate_token_value(
    token_type: TokenType,
    value: &TokenValue,
) -> Result<(), ValidationError> {
    if value.token_type() != token_type || !value.is_well_formed() {
        return Err(ValidationError::TypeValueMismatch {
            token_type,
            expected: token_type.shape_description(),
            actual: value.shape(),
        });
    }
    Ok(())
}

/// Validates a token's value against its own type tag.
///
/// Constructed tokens always pass the tag check by construction; this still
/// rejects fine-grained rule violations such as an empty font stack.
pub fn validate_token(token: &Token) -> Result<(), ValidationError> {
    validate_token_value(token.token_type(), &token.value)
}
