//! Marker Grammar
//!
//! The textual conventions recognized in marked workflow scripts. A marker is a
//! literal line pattern used purely as a delimiter; it carries no runtime
//! behavior of its own.
//!
//! Recognized line forms:
//! - Step marker: `## STEP <integer> : <title text to end of line>`
//! - Node marker: `###[<title text, no nested brackets>]`
//! - Editable-region open: 4-6 `#` characters, whitespace, `INPUT PYTHON`
//! - Editable-region close: 4-6 `#` characters, whitespace, `END INPUT PYTHON`
//!
//! The 4-6 `#` tolerance is applied uniformly to both region markers.
//! Classification is strict on form: a line with an unmatched bracket or seven
//! `#` characters is not a marker and is treated as ordinary content by every
//! consumer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Step marker line, capturing the step number and the title.
pub static STEP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s+STEP\s+(\d+)\s*:\s*(.*?)\s*$").unwrap());

/// Node marker line, capturing the node name between brackets.
pub static NODE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^###\[([^\[\]]+)\]\s*$").unwrap());

/// Editable-region opening line.
pub static INPUT_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#{4,6}\s+INPUT PYTHON\s*$").unwrap());

/// Editable-region closing line.
pub static INPUT_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#{4,6}\s+END INPUT PYTHON\s*$").unwrap());

/// A classified marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerLine {
    /// `## STEP <n> : <title>`
    Step { number: u32, title: String },
    /// `###[<name>]`
    Node { name: String },
    /// `#### INPUT PYTHON`
    InputOpen,
    /// `#### END INPUT PYTHON`
    InputClose,
}

/// Determine whether a line is a marker, and which kind.
///
/// Returns `None` for ordinary content lines, including malformed
/// near-markers. Step numbers that do not fit a `u32` are not recognized.
pub fn classify_line(line: &str) -> Option<MarkerLine> {
    if INPUT_CLOSE.is_match(line) {
        return Some(MarkerLine::InputClose);
    }
    if INPUT_OPEN.is_match(line) {
        return Some(MarkerLine::InputOpen);
    }
    if let Some(captures) = STEP_MARKER.captures(line) {
        let number = captures[1].parse::<u32>().ok()?;
        return Some(MarkerLine::Step {
            number,
            title: captures[2].to_string(),
        });
    }
    if let Some(captures) = NODE_MARKER.captures(line) {
        return Some(MarkerLine::Node {
            name: captures[1].to_string(),
        });
    }
    None
}

/// True when the line opens or closes a section: a step or node marker.
///
/// Region markers are interior to a section and do not bound one.
pub fn is_section_boundary(line: &str) -> bool {
    matches!(
        classify_line(line),
        Some(MarkerLine::Step { .. }) | Some(MarkerLine::Node { .. })
    )
}
