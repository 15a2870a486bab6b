//! Editable-Region Locator & Region Replacer
//!
//! A section may contain one user-editable region bounded by
//! `#### INPUT PYTHON` and `#### END INPUT PYTHON` marker lines. At most one
//! region is recognized per section: the first opening marker and the first
//! closing marker after it. An opening marker with no closing marker before
//! the section ends is malformed; the locator fails closed and reports no
//! region rather than guessing a boundary.
//!
//! Unlike the section scan, splitting here keeps the raw `\n` segmentation so
//! that `before + '\n' + interior + '\n' + after` reassembles the content
//! byte-for-byte, trailing newline included.

use crate::qflow::grammar::{classify_line, MarkerLine};

/// A section's content split around its editable region.
///
/// `before` ends with the opening marker line, `after` starts with the
/// closing marker line; `interior` is everything strictly between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSplit {
    pub before: String,
    pub interior: String,
    pub after: String,
}

/// Locate the editable region inside a section's content.
///
/// Returns `None` when there is no opening marker, or when the opening marker
/// is unterminated. Content without a region is opaque: callers fall back to
/// whole-content display and never attempt a substitution.
pub fn find_region(content: &str) -> Option<RegionSplit> {
    let lines: Vec<&str> = content.split('\n').collect();
    let open = lines
        .iter()
        .position(|line| classify_line(line) == Some(MarkerLine::InputOpen))?;
    let close = lines[open + 1..]
        .iter()
        .position(|line| classify_line(line) == Some(MarkerLine::InputClose))
        .map(|offset| open + 1 + offset)?;
    Some(RegionSplit {
        before: lines[..=open].join("\n"),
        interior: lines[open + 1..close].join("\n"),
        after: lines[close..].join("\n"),
    })
}

/// Replace the interior of the editable region with a new payload.
///
/// Both marker lines and everything outside the region are preserved
/// verbatim; the payload is trimmed and substituted wholesale. Content
/// without a well-formed region is returned unchanged - a no-op, not an
/// error. The payload is not re-parsed or validated.
pub fn replace_region(content: &str, new_interior: &str) -> String {
    match find_region(content) {
        Some(split) => format!(
            "{}\n{}\n{}",
            split.before,
            new_interior.trim(),
            split.after
        ),
        None => content.to_string(),
    }
}
