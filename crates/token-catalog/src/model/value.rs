//! Value types for design tokens.
//!
//! Each token type dictates exactly one value shape (font families and font
//! weights each admit two alternative shapes, all other types exactly one).
//! The value model is a sum type, so a type/value mismatch is unrepresentable
//! once a value exists in memory; mismatches can only arise at the untyped
//! boundary, i.e. deserialization and [`crate::validate::validate_token_value`].

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The closed set of token types.
///
/// Closed means: no type outside this set is valid, and adding one is a
/// model change, not a runtime extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    #[serde(rename = "color")]
    Color,
    #[serde(rename = "dimension")]
    Dimension,
    #[serde(rename = "font-family")]
    FontFamily,
    #[serde(rename = "fontWeight")]
    FontWeight,
    #[serde(rename = "duration")]
    Duration,
    #[serde(rename = "cubicBezier")]
    CubicBezier,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "shadow")]
    Shadow,
}

impl TokenType {
    /// All token types, in declaration order.
    pub const ALL: [TokenType; 8] = [
        TokenType::Color,
        TokenType::Dimension,
        TokenType::FontFamily,
        TokenType::FontWeight,
        TokenType::Duration,
        TokenType::CubicBezier,
        TokenType::Number,
        TokenType::Shadow,
    ];

    /// Returns the canonical string tag (the wire spelling).
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::FontFamily => "font-family",
            TokenType::FontWeight => "fontWeight",
            TokenType::Duration => "duration",
            TokenType::CubicBezier => "cubicBezier",
            TokenType::Number => "number",
            TokenType::Shadow => "shadow",
        }
    }

    /// Creates a TokenType from its canonical string tag.
    pub fn from_tag(tag: &str) -> Option<TokenType> {
        match tag {
            "color" => Some(TokenType::Color),
            "dimension" => Some(TokenType::Dimension),
            "font-family" => Some(TokenType::FontFamily),
            "fontWeight" => Some(TokenType::FontWeight),
            "duration" => Some(TokenType::Duration),
            "cubicBezier" => Some(TokenType::CubicBezier),
            "number" => Some(TokenType::Number),
            "shadow" => Some(TokenType::Shadow),
            _ => None,
        }
    }

    /// Returns a human-readable description of the value shape this type
    /// requires.
    pub fn shape_description(&self) -> &'static str {
        match self {
            TokenType::Color => "an ordered triple of numbers",
            TokenType::Dimension => "a unit-bearing string",
            TokenType::FontFamily => "a string or a non-empty list of strings",
            TokenType::FontWeight => "a string or a number",
            TokenType::Duration => "a unit-bearing string",
            TokenType::CubicBezier => "an ordered quadruple of numbers",
            TokenType::Number => "a number",
            TokenType::Shadow => "a record of color, offsetX, offsetY, blur and spread strings",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A font family value: a single family name or an ordered fallback list.
///
/// A fallback list must be non-empty; the deserializer and
/// [`TokenValue::is_well_formed`] both reject an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FontFamily {
    /// A single family name, e.g. `"Inter"`.
    Single(String),
    /// An ordered, non-empty fallback list, e.g. `["Inter", "sans-serif"]`.
    Stack(Vec<String>),
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Single(String),
            Stack(Vec<String>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Single(family) => Ok(FontFamily::Single(family)),
            Repr::Stack(stack) if stack.is_empty() => {
                Err(D::Error::custom("font-family fallback list must not be empty"))
            }
            Repr::Stack(stack) => Ok(FontFamily::Stack(stack)),
        }
    }
}

/// A font weight value: a keyword (e.g. `"bold"`) or a numeric weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Keyword(String),
    Numeric(f64),
}

/// A drop-shadow definition. All fields are unit-bearing strings except
/// `color`, which is a color string (e.g. `"#00000040"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShadowValue {
    pub color: String,
    pub offset_x: String,
    pub offset_y: String,
    pub blur: String,
    pub spread: String,
}

/// A typed token value: one variant per [`TokenType`], each carrying its own
/// strongly-typed payload.
///
/// On the wire this is adjacently tagged as a `type`/`value` field pair, so `{"type": "color", "value": "#ff0000"}` fails to deserialize
/// instead of producing a mismatched token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TokenValue {
    /// Ordered channel triple, e.g. `[255.0, 0.0, 0.0]`.
    #[serde(rename = "color")]
    Color([f64; 3]),

    /// Unit-bearing length string, e.g. `"8px"`.
    #[serde(rename = "dimension")]
    Dimension(String),

    /// Single family name or non-empty fallback list.
    #[serde(rename = "font-family")]
    FontFamily(FontFamily),

    /// Keyword or numeric weight.
    #[serde(rename = "fontWeight")]
    FontWeight(FontWeight),

    /// Unit-bearing time string, e.g. `"200ms"`.
    #[serde(rename = "duration")]
    Duration(String),

    /// Four control-point coordinates.
    #[serde(rename = "cubicBezier")]
    CubicBezier([f64; 4]),

    /// A plain number.
    #[serde(rename = "number")]
    Number(f64),

    /// A drop-shadow record.
    #[serde(rename = "shadow")]
    Shadow(ShadowValue),
}

impl TokenValue {
    /// Returns the token type this value belongs to.
    pub fn token_type(&self) -> TokenType {
        match self {
            TokenValue::Color(_) => TokenType::Color,
            TokenValue::Dimension(_) => TokenType::Dimension,
            TokenValue::FontFamily(_) => TokenType::FontFamily,
            TokenValue::FontWeight(_) => TokenType::FontWeight,
            TokenValue::Duration(_) => TokenType::Duration,
            TokenValue::CubicBezier(_) => TokenType::CubicBezier,
            TokenValue::Number(_) => TokenType::Number,
            TokenValue::Shadow(_) => TokenType::Shadow,
        }
    }

    /// Checks the fine-grained shape rules beyond the variant tag itself.
    ///
    /// The only such rule: a font-family fallback list must be non-empty.
    pub fn is_well_formed(&self) -> bool {
        match self {
            TokenValue::FontFamily(FontFamily::Stack(stack)) => !stack.is_empty(),
            _ => true,
        }
    }

    /// Describes the concrete shape of this value, for mismatch messages.
    pub fn shape(&self) -> String {
        match self {
            TokenValue::Color(_) => "an ordered triple of numbers".to_string(),
            TokenValue::Dimension(_) | TokenValue::Duration(_) => "a string".to_string(),
            TokenValue::FontFamily(FontFamily::Single(_)) => "a string".to_string(),
            TokenValue::FontFamily(FontFamily::Stack(stack)) => {
                format!("a list of {} strings", stack.len())
            }
            TokenValue::FontWeight(FontWeight::Keyword(_)) => "a string".to_string(),
            TokenValue::FontWeight(FontWeight::Numeric(_)) => "a number".to_string(),
            TokenValue::CubicBezier(_) => "an ordered quadruple of numbers".to_string(),
            TokenValue::Number(_) => "a number".to_string(),
            TokenValue::Shadow(_) => "a shadow record".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for ty in TokenType::ALL {
            assert_eq!(TokenType::from_tag(ty.as_str()), Some(ty));
        }
        assert_eq!(TokenType::from_tag("gradient"), None);
        assert_eq!(TokenType::from_tag("Color"), None);
    }

    #[test]
    fn test_value_token_type_projection() {
        assert_eq!(TokenValue::Color([0.0, 0.0, 0.0]).token_type(), TokenType::Color);
        assert_eq!(TokenValue::Dimension("8px".into()).token_type(), TokenType::Dimension);
        assert_eq!(
            TokenValue::FontFamily(FontFamily::Single("Inter".into())).token_type(),
            TokenType::FontFamily
        );
        assert_eq!(
            TokenValue::FontWeight(FontWeight::Numeric(700.0)).token_type(),
            TokenType::FontWeight
        );
        assert_eq!(TokenValue::Duration("200ms".into()).token_type(), TokenType::Duration);
        assert_eq!(
            TokenValue::CubicBezier([0.25, 0.1, 0.25, 1.0]).token_type(),
            TokenType::CubicBezier
        );
        assert_eq!(TokenValue::Number(1.5).token_type(), TokenType::Number);
        assert_eq!(
            TokenValue::Shadow(ShadowValue {
                color: "#00000040".into(),
                offset_x: "0px".into(),
                offset_y: "2px".into(),
                blur: "4px".into(),
                spread: "0px".into(),
            })
            .token_type(),
            TokenType::Shadow
        );
    }

    #[test]
    fn test_empty_font_stack_is_malformed() {
        let empty = TokenValue::FontFamily(FontFamily::Stack(vec![]));
        assert!(!empty.is_well_formed());

        let stack = TokenValue::FontFamily(FontFamily::Stack(vec!["Inter".into()]));
        assert!(stack.is_well_formed());

        let single = TokenValue::FontFamily(FontFamily::Single("Inter".into()));
        assert!(single.is_well_formed());
    }

    #[test]
    fn test_deserialize_rejects_tag_payload_mismatch() {
        // A color carrying a hex string must be rejected, not coerced.
        let err = serde_json::from_str::<TokenValue>(r##"{"type": "color", "value": "#ff0000"}"##);
        assert!(err.is_err());

        let err = serde_json::from_str::<TokenValue>(r#"{"type": "number", "value": "8"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_deserialize_rejects_wrong_arity() {
        assert!(serde_json::from_str::<TokenValue>(r#"{"type": "color", "value": [255, 0]}"#).is_err());
        assert!(
            serde_json::from_str::<TokenValue>(r#"{"type": "color", "value": [255, 0, 0, 0]}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<TokenValue>(r#"{"type": "cubicBezier", "value": [0.25, 0.1, 0.25]}"#)
                .is_err()
        );
    }

    #[test]
    fn test_deserialize_rejects_empty_font_stack() {
        assert!(
            serde_json::from_str::<TokenValue>(r#"{"type": "font-family", "value": []}"#).is_err()
        );
    }

    #[test]
    fn test_deserialize_rejects_partial_shadow() {
        // Missing `spread`.
        let partial = r##"{"type": "shadow", "value": {
            "color": "#000", "offsetX": "0px", "offsetY": "2px", "blur": "4px"}}"##;
        assert!(serde_json::from_str::<TokenValue>(partial).is_err());

        // Unknown extra field.
        let extra = r##"{"type": "shadow", "value": {
            "color": "#000", "offsetX": "0px", "offsetY": "2px",
            "blur": "4px", "spread": "0px", "inset": true}}"##;
        assert!(serde_json::from_str::<TokenValue>(extra).is_err());
    }

    #[test]
    fn test_deserialize_alternative_shapes() {
        let single: TokenValue =
            serde_json::from_str(r#"{"type": "font-family", "value": "Inter"}"#).unwrap();
        assert_eq!(single, TokenValue::FontFamily(FontFamily::Single("Inter".into())));

        let stack: TokenValue =
            serde_json::from_str(r#"{"type": "font-family", "value": ["Inter", "sans-serif"]}"#)
                .unwrap();
        assert_eq!(
            stack,
            TokenValue::FontFamily(FontFamily::Stack(vec!["Inter".into(), "sans-serif".into()]))
        );

        let keyword: TokenValue =
            serde_json::from_str(r#"{"type": "fontWeight", "value": "bold"}"#).unwrap();
        assert_eq!(keyword, TokenValue::FontWeight(FontWeight::Keyword("bold".into())));

        let numeric: TokenValue =
            serde_json::from_str(r#"{"type": "fontWeight", "value": 700}"#).unwrap();
        assert_eq!(numeric, TokenValue::FontWeight(FontWeight::Numeric(700.0)));
    }

    #[test]
    fn test_serialize_wire_shape() {
        let value = TokenValue::Color([255.0, 0.0, 0.0]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["type"], "color");
        assert_eq!(json["value"], serde_json::json!([255.0, 0.0, 0.0]));

        let shadow = TokenValue::Shadow(ShadowValue {
            color: "#00000040".into(),
            offset_x: "0px".into(),
            offset_y: "2px".into(),
            blur: "4px".into(),
            spread: "0px".into(),
        });
        let json = serde_json::to_value(&shadow).unwrap();
        assert_eq!(json["value"]["offsetX"], "0px");
        assert_eq!(json["value"]["offsetY"], "2px");
    }
}
