//! Output formats for parsed patterns
//!
//! Two renderings of a node sequence: pretty JSON via serde, and a compact
//! tree view for terminals.

use crate::glob::ast::{GroupItem, Node};

/// Serialize a node sequence as pretty-printed JSON.
pub fn to_json_str(nodes: &[Node]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(nodes)
}

/// Render a node sequence as an indented tree, one top-level construct per
/// branch.
pub fn to_tree_str(nodes: &[Node]) -> String {
    let mut result = String::new();

    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        append_node(&mut result, node, "", is_last);
    }

    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    let label = match node {
        Node::Literal(text) => format!("literal: {text:?}"),
        Node::RunMatch { recursive: false } => "run: *".to_string(),
        Node::RunMatch { recursive: true } => "run: **".to_string(),
        Node::CharacterMatch => "any: ?".to_string(),
        Node::CharacterClass { negated, members } => {
            let inner: String = members.iter().collect();
            let bang = if *negated { "!" } else { "" };
            format!("class: [{bang}{inner}]")
        }
        Node::Group(_) => "group".to_string(),
        Node::Range(low, high) => format!("range: {low}..{high}"),
    };

    result.push_str(&format!("{prefix}{connector} {label}\n"));

    if let Node::Group(item) = node {
        let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
        append_group_item(result, item, &child_prefix, true);
    }
}

fn append_group_item(result: &mut String, item: &GroupItem, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    match item {
        GroupItem::Choice(items) => {
            result.push_str(&format!("{prefix}{connector} choice\n"));

            let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });

            for (i, child) in items.iter().enumerate() {
                let child_is_last = i == items.len() - 1;
                append_group_item(result, child, &child_prefix, child_is_last);
            }
        }
        GroupItem::Text(value) => {
            result.push_str(&format!("{prefix}{connector} text: {value:?}\n"));
        }
    }
}
