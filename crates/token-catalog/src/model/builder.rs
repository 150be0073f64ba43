//! Builder API for assembling group snapshots.
//!
//! The external store owns real mutation; these builders only produce plain
//! data, which makes them convenient for one-shot snapshots and test
//! fixtures.
//!
//! # Example
//!
//! ```rust
//! use token_catalog::GroupBuilder;
//!
//! let base = GroupBuilder::new("base")
//!     .color("red", [255.0, 0.0, 0.0])
//!     .dimension("gap-sm", "8px")
//!     .group("motion", |g| g.duration("fade", "200ms"))
//!     .build();
//!
//! assert_eq!(base.token_count(), 3);
//! ```

use crate::model::{FontFamily, FontWeight, Group, ShadowValue, Token};

/// Builder for constructing a [`Group`] with tokens and nested sub-groups.
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    group: Group,
}

impl GroupBuilder {
    /// Creates a new builder for a group with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { group: Group::new(name) }
    }

    /// Replaces the generated group id with an explicit one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.group.id = id.into();
        self
    }

    /// Appends an already-constructed token.
    pub fn token(mut self, token: Token) -> Self {
        self.group.tokens.push(token);
        self
    }

    /// Appends a nested sub-group using a builder function.
    pub fn group<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(GroupBuilder) -> GroupBuilder,
    {
        self.group.groups.push(f(GroupBuilder::new(name)).build());
        self
    }

    // =========================================================================
    // Typed token helpers
    // =========================================================================

    /// Appends a color token.
    pub fn color(self, name: impl Into<String>, channels: [f64; 3]) -> Self {
        self.token(Token::color(name, channels))
    }

    /// Appends a dimension token.
    pub fn dimension(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.token(Token::dimension(name, value))
    }

    /// Appends a font-family token.
    pub fn font_family(self, name: impl Into<String>, family: FontFamily) -> Self {
        self.token(Token::font_family(name, family))
    }

    /// Appends a font-weight token.
    pub fn font_weight(self, name: impl Into<String>, weight: FontWeight) -> Self {
        self.token(Token::font_weight(name, weight))
    }

    /// Appends a duration token.
    pub fn duration(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.token(Token::duration(name, value))
    }

    /// Appends a cubic-bezier token.
    pub fn cubic_bezier(self, name: impl Into<String>, points: [f64; 4]) -> Self {
        self.token(Token::cubic_bezier(name, points))
    }

    /// Appends a number token.
    pub fn number(self, name: impl Into<String>, value: f64) -> Self {
        self.token(Token::number(name, value))
    }

    /// Appends a shadow token.
    pub fn shadow(self, name: impl Into<String>, shadow: ShadowValue) -> Self {
        self.token(Token::shadow(name, shadow))
    }

    /// Finishes the group.
    pub fn build(self) -> Group {
        self.group
    }
}
