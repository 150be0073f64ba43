//! Typed design-token catalog.
//!
//! A model for named, grouped design values (colors, dimensions, font
//! families, font weights, durations, cubic-bezier curves, numbers, shadows)
//! where each token's value shape is determined by its declared type, plus
//! deterministic first-match lookup by id across nested group collections.
//!
//! # Overview
//!
//! - **Closed type set**: exactly 8 token types; each dictates one value
//!   shape (font families and font weights each admit two alternatives).
//!   The value model is a sum type, so a type/value mismatch cannot exist in
//!   memory; mismatched input is rejected at deserialization or by
//!   [`validate_token_value`].
//! - **Read-only core**: the catalog consumes group snapshots as plain data
//!   and never mutates or retains them. Mutation, persistence, and UI
//!   binding belong to the external store.
//! - **Absence is not an error**: lookup returns [`Option`], never fails.
//!
//! # Quick Start
//!
//! ```rust
//! use token_catalog::{find_token_by_id, validate_token_value, GroupBuilder, TokenType, TokenValue};
//!
//! let groups = vec![
//!     GroupBuilder::new("base")
//!         .color("red", [255.0, 0.0, 0.0])
//!         .group("spacing", |g| g.dimension("gap-sm", "8px"))
//!         .build(),
//! ];
//!
//! let red_id = groups[0].tokens[0].id.clone();
//! let red = find_token_by_id(&red_id, &groups).unwrap();
//! assert_eq!(red.token_type(), TokenType::Color);
//! assert!(find_token_by_id("missing", &groups).is_none());
//!
//! assert!(validate_token_value(TokenType::Color, &TokenValue::Color([255.0, 0.0, 0.0])).is_ok());
//! assert!(validate_token_value(TokenType::Color, &TokenValue::Dimension("8px".into())).is_err());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (TokenType, TokenValue, Token, Group, builders)
//! - [`lookup`]: First-match lookup and the transient batch index
//! - [`validate`]: Shape validation at the untyped boundary
//! - [`error`]: Error types
//!
//! # Concurrency
//!
//! Everything here is pure and synchronous: read-only borrows, no interior
//! mutability, no I/O. Lookup and validation are reentrant and safe to call
//! concurrently against the same snapshot as long as the caller does not
//! mutate it mid-call.

pub mod error;
pub mod lookup;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::ValidationError;
pub use lookup::{TokenIndex, find_token_by_id};
pub use model::{
    FontFamily, FontWeight, Group, GroupBuilder, ShadowValue, Token, TokenType, TokenValue,
};
pub use validate::{validate_token, validate_token_value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
