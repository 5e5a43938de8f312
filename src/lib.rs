//! # globpat
//!
//! A parser for extended glob patterns: the ordinary wildcards `*`, `**`,
//! `?` and `[...]`, plus brace choice groups `{a,b,c}` and numeric ranges
//! `{1..10}`, parsed into an owned AST.
//!
//! Matching in the strict dialect delegates to the platform `fnmatch`
//! primitive over the raw pattern text; see [`glob::Pattern`].
//!
//! ## Testing
//!
//! For parser testing guidelines, see the [testing module](glob::testing).
//! Parser tests assert the full shape of the parsed nodes, not counts.

pub mod glob;

pub use glob::{parse, GroupItem, InvalidModeError, Mode, Node, ParseError, Pattern};
