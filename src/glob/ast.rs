//! AST node types produced by the glob pattern parser
//!
//! A pattern parses to an ordered sequence of [`Node`] values; source order is
//! significant because patterns compose left to right. Brace groups carry a
//! recursive [`GroupItem`] tree that only nests downward, so plain owned
//! vectors are enough; no indirection beyond `Vec` is needed.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One parsed top-level construct of a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A run of ordinary characters, escapes already resolved
    Literal(String),

    /// `*` when `recursive` is false (matches within one path segment),
    /// `**` when true (matches across segments)
    RunMatch { recursive: bool },

    /// `?`, matches exactly one character
    CharacterMatch,

    /// `[...]` or `[!...]`; members are unordered and deduplicated
    CharacterClass {
        negated: bool,
        members: BTreeSet<char>,
    },

    /// A brace group that was not recognized as a numeric range
    Group(GroupItem),

    /// The `{low..high}` idiom. Either bound may be negative, and no ordering
    /// between them is guaranteed.
    Range(i64, i64),
}

/// One level of a brace group.
///
/// `Choice` holds the comma-separated alternatives of a single brace level in
/// source order, without deduplication, and is never empty after parsing: an
/// empty group yields one empty-text alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupItem {
    Choice(Vec<GroupItem>),
    Text(String),
}

impl fmt::Display for GroupItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupItem::Choice(items) => {
                let inner = items
                    .iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(f, "{{{inner}}}")
            }
            GroupItem::Text(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_nested_choices_in_braces() {
        let item = GroupItem::Choice(vec![
            GroupItem::Choice(vec![
                GroupItem::Text("a".to_string()),
                GroupItem::Text("b".to_string()),
            ]),
            GroupItem::Text("c".to_string()),
        ]);

        assert_eq!(item.to_string(), "{{a, b}, c}");
    }

    #[test]
    fn display_renders_text_verbatim() {
        let item = GroupItem::Text("a,b".to_string());

        assert_eq!(item.to_string(), "a,b");
    }
}
