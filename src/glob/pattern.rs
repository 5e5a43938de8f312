//! Pattern wrapper and dialect selection
//!
//! [`Pattern`] ties a pattern string to a [`Mode`] chosen by the caller
//! before parsing begins. The non-strict dialects run the grammar parser at
//! construction time and retain the AST; matching itself always goes through
//! the platform `fnmatch` primitive over the raw pattern text. The parsed
//! nodes describe the pattern but do not drive matching; an AST-walking
//! evaluator for the grouping dialects would be a separate component and is
//! deliberately not part of this crate.

use std::ffi::CString;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::glob::ast::Node;
use crate::glob::parser::{parse, ParseError};

/// Controls how glob patterns are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Plain glob wildcards only; braces are ordinary characters and the
    /// grammar parser is bypassed entirely
    #[default]
    Strict,

    /// Wildcards plus brace choice and numeric range expansion
    Grouping,

    /// The editorconfig flavor of brace expansion; parsed identically to
    /// [`Mode::Grouping`] here
    EditorConfig,
}

/// Error for a mode name the CLI or a config surface does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidModeError(String);

impl fmt::Display for InvalidModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid mode '{}'", self.0)
    }
}

impl std::error::Error for InvalidModeError {}

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "strict" => Ok(Mode::Strict),
            "grouping" => Ok(Mode::Grouping),
            "editorconfig" => Ok(Mode::EditorConfig),
            other => Err(InvalidModeError(other.to_string())),
        }
    }
}

/// A glob pattern bound to an interpretation mode.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    nodes: Vec<Node>,
    mode: Mode,
}

impl Pattern {
    /// Build a pattern in the given mode.
    ///
    /// [`Mode::Strict`] skips parsing and stores no nodes; the other modes
    /// parse eagerly, so a malformed pattern fails here rather than at match
    /// time.
    pub fn new(pattern: &str, mode: Mode) -> Result<Self, ParseError> {
        let nodes = match mode {
            Mode::Strict => Vec::new(),
            Mode::Grouping | Mode::EditorConfig => parse(pattern)?,
        };

        Ok(Pattern {
            source: pattern.to_string(),
            nodes,
            mode,
        })
    }

    /// The pattern text this value was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The parsed node sequence. Empty in strict mode.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Test a candidate string against the raw pattern text.
    ///
    /// Delegates to `fnmatch(3)`. Anything other than a clean match reports
    /// `false`, including candidates the platform rejects outright (an
    /// interior NUL, for instance).
    pub fn matches(&self, candidate: &str) -> bool {
        fn_match(&self.source, candidate).unwrap_or(false)
    }
}

/// The raw `fnmatch` trichotomy: `Some(true)` on a match, `Some(false)` on a
/// clean mismatch or any other platform return, `None` when the strings
/// cannot cross the C boundary.
fn fn_match(pattern: &str, candidate: &str) -> Option<bool> {
    let pattern = CString::new(pattern).ok()?;
    let candidate = CString::new(candidate).ok()?;

    let rc = unsafe { libc::fnmatch(pattern.as_ptr(), candidate.as_ptr(), 0) };

    match rc {
        0 => Some(true),
        libc::FNM_NOMATCH => Some(false),
        _ => Some(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip_through_from_str() {
        assert_eq!("strict".parse(), Ok(Mode::Strict));
        assert_eq!("grouping".parse(), Ok(Mode::Grouping));
        assert_eq!("editorconfig".parse(), Ok(Mode::EditorConfig));
    }

    #[test]
    fn unknown_mode_names_are_rejected() {
        let result = Mode::from_str("posix");

        assert_eq!(result, Err(InvalidModeError("posix".to_string())));
    }

    #[test]
    fn strict_mode_stores_no_nodes() {
        let pattern = Pattern::new("ab{c,d}", Mode::Strict).unwrap();

        assert!(pattern.nodes().is_empty());
        assert_eq!(pattern.source(), "ab{c,d}");
        assert_eq!(pattern.mode(), Mode::Strict);
    }

    #[test]
    fn grouping_mode_parses_eagerly() {
        let error = Pattern::new("[abc", Mode::Grouping).unwrap_err();

        assert_eq!(error, ParseError::EndOfInput);
    }
}
