//! The token entity: a named, typed design value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{FontFamily, FontWeight, ShadowValue, TokenType, TokenValue};

/// A named, typed design value.
///
/// Tokens are immutable snapshots from the catalog's point of view: lookup
/// and validation read them and never mutate one they are given. Id
/// uniqueness across groups is owned by the store supplying the snapshot,
/// not enforced here.
///
/// Serialized flat as `{"id", "name", "description"?, "type", "value"}`,
/// with the `type`/`value` pair coming from the adjacently tagged
/// [`TokenValue`]. Deserialization therefore rejects any payload whose shape
/// does not match the declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Identifier the token is looked up by.
    pub id: String,
    /// Display label; not required to be unique.
    pub name: String,
    /// Optional description; absence is distinct from an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The typed value.
    #[serde(flatten)]
    pub value: TokenValue,
}

impl Token {
    /// Creates a token with a fresh v4 UUID id and no description.
    pub fn new(name: impl Into<String>, value: TokenValue) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            value,
        }
    }

    /// Replaces the id with an explicit one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the type tag dictated by the value.
    pub fn token_type(&self) -> TokenType {
        self.value.token_type()
    }

    // =========================================================================
    // Typed constructors
    // =========================================================================

    /// Creates a color token from an ordered channel triple.
    pub fn color(name: impl Into<String>, channels: [f64; 3]) -> Self {
        Self::new(name, TokenValue::Color(channels))
    }

    /// Creates a dimension token, e.g. `"8px"`.
    pub fn dimension(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, TokenValue::Dimension(value.into()))
    }

    /// Creates a font-family token.
    pub fn font_family(name: impl Into<String>, family: FontFamily) -> Self {
        Self::new(name, TokenValue::FontFamily(family))
    }

    /// Creates a font-weight token.
    pub fn font_weight(name: impl Into<String>, weight: FontWeight) -> Self {
        Self::new(name, TokenValue::FontWeight(weight))
    }

    /// Creates a duration token, e.g. `"200ms"`.
    pub fn duration(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, TokenValue::Duration(value.into()))
    }

    /// Creates a cubic-bezier token from four control-point coordinates.
    pub fn cubic_bezier(name: impl Into<String>, points: [f64; 4]) -> Self {
        Self::new(name, TokenValue::CubicBezier(points))
    }

    /// Creates a number token.
    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, TokenValue::Number(value))
    }

    /// Creates a shadow token.
    pub fn shadow(name: impl Into<String>, shadow: ShadowValue) -> Self {
        Self::new(name, TokenValue::Shadow(shadow))
    }
}
