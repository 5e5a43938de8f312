//! Snapshot tests for the AST output formats
//!
//! Inline snapshots keep the expected renderings next to the inputs; both
//! formats must stay byte-stable because the CLI exposes them.

use globpat::glob::formats;
use globpat::glob::parse;

#[test]
fn test_tree_format_for_a_path_pattern() {
    let nodes = parse("src/**/*.rs").unwrap();

    insta::assert_snapshot!(formats::to_tree_str(&nodes), @r#"
├─ literal: "src/"
├─ run: **
├─ literal: "/"
├─ run: *
└─ literal: ".rs"
"#);
}

#[test]
fn test_tree_format_for_nested_groups() {
    let nodes = parse("{a,{b,c}}").unwrap();

    insta::assert_snapshot!(formats::to_tree_str(&nodes), @r#"
└─ group
   └─ choice
      ├─ text: "a"
      └─ choice
         ├─ text: "b"
         └─ text: "c"
"#);
}

#[test]
fn test_tree_format_for_classes_and_ranges() {
    let nodes = parse("?[!ab]{1..3}").unwrap();

    insta::assert_snapshot!(formats::to_tree_str(&nodes), @r"
├─ any: ?
├─ class: [!ab]
└─ range: 1..3
");
}

#[test]
fn test_json_format_for_a_group_pattern() {
    let nodes = parse("x{a,b}").unwrap();

    insta::assert_snapshot!(formats::to_json_str(&nodes).unwrap(), @r#"
[
  {
    "Literal": "x"
  },
  {
    "Group": {
      "Choice": [
        {
          "Text": "a"
        },
        {
          "Text": "b"
        }
      ]
    }
  }
]
"#);
}

#[test]
fn test_json_format_for_classes_and_ranges() {
    let nodes = parse("[ba]{2..1}").unwrap();

    insta::assert_snapshot!(formats::to_json_str(&nodes).unwrap(), @r#"
[
  {
    "CharacterClass": {
      "negated": false,
      "members": [
        "a",
        "b"
      ]
    }
  },
  {
    "Range": [
      2,
      1
    ]
  }
]
"#);
}
