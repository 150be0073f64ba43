//! First-match token lookup over group collections.
//!
//! Traversal order is the contract here: groups in sequence order, each
//! group's own tokens in sequence order, then its nested sub-groups
//! depth-first, before the next sibling group. The walk is iterative with an
//! explicit stack, so arbitrarily deep trees cannot overflow the call stack.

use rustc_hash::FxHashMap;

use crate::model::{Group, Token};

/// Finds the first token whose `id` equals `token_id`.
///
/// The scan stops at the first match, so later duplicates (a data-integrity
/// violation on the store's side) are never inspected. Absence is a normal
/// outcome and returns `None`; an empty `groups` slice or an id that matches
/// nothing are routine branches for the caller, not errors.
///
/// Returns a borrow into `groups`; nothing is copied or mutated, and no
/// reference is retained past the call. O(total tokens) worst case.
pub fn find_token_by_id<'a>(token_id: &str, groups: &'a [Group]) -> Option<&'a Token> {
    let mut stack: Vec<&'a Group> = Vec::with_capacity(groups.len());
    stack.extend(groups.iter().rev());

    while let Some(group) = stack.pop() {
        if let Some(token) = group.tokens.iter().find(|token| token.id == token_id) {
            return Some(token);
        }
        // Sub-groups go on top of the stack so they are visited before the
        // next sibling group.
        stack.extend(group.groups.iter().rev());
    }

    None
}

/// Transient id → token index for batch lookups.
///
/// Built by the same traversal as [`find_token_by_id`]; when an id occurs
/// more than once, the first occurrence in traversal order wins, so
/// [`TokenIndex::get`] agrees with a fresh linear scan for every id. The
/// index borrows the group slice and is only valid for the snapshot it was
/// built from.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex<'a> {
    by_id: FxHashMap<&'a str, &'a Token>,
}

impl<'a> TokenIndex<'a> {
    /// Builds an index over the given groups.
    pub fn build(groups: &'a [Group]) -> Self {
        let mut by_id: FxHashMap<&'a str, &'a Token> = FxHashMap::default();
        let mut stack: Vec<&'a Group> = Vec::with_capacity(groups.len());
        stack.extend(groups.iter().rev());

        while let Some(group) = stack.pop() {
            for token in &group.tokens {
                // First occurrence in traversal order wins.
                by_id.entry(token.id.as_str()).or_insert(token);
            }
            stack.extend(group.groups.iter().rev());
        }

        Self { by_id }
    }

    /// Looks up a token by id.
    pub fn get(&self, token_id: &str) -> Option<&'a Token> {
        self.by_id.get(token_id).copied()
    }

    /// Number of distinct ids in the index.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the index holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
