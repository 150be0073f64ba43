//! The group entity: the catalog's organizational unit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Token;

/// An ordered collection of tokens, possibly holding nested sub-groups.
///
/// Order is meaningful for deterministic first-match search and stable
/// display. It does not rank duplicate ids: two tokens sharing an id within
/// one collection is a data-integrity violation on the store's side, not a
/// precedence feature.
///
/// A flat store simply leaves `groups` empty; lookup then degrades to a
/// plain per-group scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    /// Tokens owned directly by this group, in display order.
    #[serde(default)]
    pub tokens: Vec<Token>,
    /// Nested sub-groups, visited depth-first after this group's own tokens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
}

impl Group {
    /// Creates an empty group with a fresh v4 UUID id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            tokens: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Replaces the id with an explicit one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Total number of tokens, including nested sub-groups.
    pub fn token_count(&self) -> usize {
        self.tokens.len() + self.groups.iter().map(Group::token_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_count_includes_nested() {
        let mut inner = Group::new("inner");
        inner.tokens.push(Token::number("a", 1.0));

        let mut outer = Group::new("outer");
        outer.tokens.push(Token::number("b", 2.0));
        outer.tokens.push(Token::number("c", 3.0));
        outer.groups.push(inner);

        assert_eq!(outer.token_count(), 3);
        assert_eq!(Group::new("empty").token_count(), 0);
    }

    #[test]
    fn test_deserialize_flat_group_without_subgroups() {
        // A flat store never writes a `groups` key.
        let input = r#"{
            "id": "g1",
            "name": "base",
            "tokens": [{"id": "t1", "name": "red", "type": "color", "value": [255, 0, 0]}]
        }"#;
        let group: Group = serde_json::from_str(input).unwrap();
        assert!(group.groups.is_empty());
        assert_eq!(group.token_count(), 1);

        // And an empty sub-group vector is not written back.
        let json = serde_json::to_value(&group).unwrap();
        assert!(json.get("groups").is_none());
    }
}
