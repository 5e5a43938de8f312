//! Testing utilities for AST assertions
//!
//! Parser tests should verify the shape and content of the parsed nodes, not
//! generalities like counts alone. The fluent [`assert_nodes`] API keeps that
//! affordable: assert the node count once, then each node's exact shape, with
//! failures that print the full parsed sequence.
//!
//! ```rust-example
//! use globpat::glob::parse;
//! use globpat::glob::testing::{assert_nodes, choice, text};
//!
//! let nodes = parse("a{b,c}").unwrap();
//!
//! assert_nodes(&nodes)
//!     .count(2)
//!     .node(0, |node| node.literal("a"))
//!     .node(1, |node| node.group(choice(vec![text("b"), text("c")])));
//! ```

use std::collections::BTreeSet;

use crate::glob::ast::{GroupItem, Node};

/// Entry point for fluent assertions over a parsed node sequence.
pub fn assert_nodes(nodes: &[Node]) -> NodesAssert<'_> {
    NodesAssert { nodes }
}

/// Build a `Text` alternative for expected group shapes.
pub fn text(value: &str) -> GroupItem {
    GroupItem::Text(value.to_string())
}

/// Build a `Choice` from its alternatives.
pub fn choice(items: Vec<GroupItem>) -> GroupItem {
    GroupItem::Choice(items)
}

/// Build an expected member set from the characters of `chars`.
pub fn members(chars: &str) -> BTreeSet<char> {
    chars.chars().collect()
}

pub struct NodesAssert<'a> {
    nodes: &'a [Node],
}

impl<'a> NodesAssert<'a> {
    /// Assert the number of parsed nodes.
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.nodes.len(),
            expected,
            "node count mismatch, parsed: {:?}",
            self.nodes
        );

        self
    }

    /// Run assertions against the node at `index`.
    pub fn node(self, index: usize, check: impl FnOnce(NodeAssert<'a>)) -> Self {
        let node = self
            .nodes
            .get(index)
            .unwrap_or_else(|| panic!("no node at index {index}, parsed: {:?}", self.nodes));

        check(NodeAssert { node });

        self
    }
}

pub struct NodeAssert<'a> {
    node: &'a Node,
}

impl NodeAssert<'_> {
    pub fn literal(self, expected: &str) {
        assert_eq!(
            self.node,
            &Node::Literal(expected.to_string()),
            "expected literal {expected:?}"
        );
    }

    pub fn run_match(self, recursive: bool) {
        assert_eq!(
            self.node,
            &Node::RunMatch { recursive },
            "expected run-match (recursive: {recursive})"
        );
    }

    pub fn character_match(self) {
        assert_eq!(self.node, &Node::CharacterMatch, "expected `?` node");
    }

    /// Assert a character class by its negation flag and the characters of
    /// `expected` as the member set.
    pub fn character_class(self, negated: bool, expected: &str) {
        assert_eq!(
            self.node,
            &Node::CharacterClass {
                negated,
                members: members(expected),
            },
            "expected character class over {expected:?}"
        );
    }

    pub fn group(self, expected: GroupItem) {
        assert_eq!(
            self.node,
            &Node::Group(expected),
            "expected a non-range group"
        );
    }

    pub fn range(self, low: i64, high: i64) {
        assert_eq!(
            self.node,
            &Node::Range(low, high),
            "expected range {low}..{high}"
        );
    }
}
