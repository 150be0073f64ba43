//! Data model types for the token catalog.
//!
//! - Values (typed payloads, one shape per token type)
//! - Tokens (named, typed design values)
//! - Groups (ordered, possibly nested token collections)
//! - Builders (ergonomic snapshot construction)

pub mod builder;
pub mod group;
pub mod token;
pub mod value;

pub use builder::GroupBuilder;
pub use group::Group;
pub use token::Token;
pub use value::{FontFamily, FontWeight, ShadowValue, TokenType, TokenValue};
