//! Highlight/Reconstruction Facade
//!
//! Entry points used by the editor. Highlighting maps a node identity to the
//! line range of its section; reconstruction splices an edited section (or
//! just an edited fragment) back into place. All operations are pure
//! snapshot-in, snapshot-out transformations: any resolution miss returns
//! `None` or the unchanged document, never an error.

use serde::Serialize;

use crate::qflow::region::{find_region, replace_region};
use crate::qflow::resolve::{resolve_marker, resolve_step, NodeIdentity};
use crate::qflow::section::{document_lines, extract_sections, Section};

/// The line range the editor should highlight for a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub start_line: usize,
    pub end_line: usize,
    pub step: u32,
}

/// Map a node identity to the line range of its section.
///
/// Resolution order: the identity's marker, then the first section of the
/// identity's step when the marker does not resolve or no section carries it.
/// When the marker matched but no step is mapped for the type, the step
/// defaults to 1. `None` means the caller must not highlight anything; that
/// is not an error condition.
pub fn highlight_for_node(document: &str, identity: &NodeIdentity) -> Option<Highlight> {
    let sections = extract_sections(document);
    if let Some(marker) = resolve_marker(identity) {
        if let Some(section) = sections.iter().find(|s| s.node_marker == marker) {
            return Some(Highlight {
                start_line: section.start_line,
                end_line: section.end_line,
                step: resolve_step(identity).unwrap_or(1),
            });
        }
    }
    let step = resolve_step(identity)?;
    let section = sections.iter().find(|s| s.step == step)?;
    Some(Highlight {
        start_line: section.start_line,
        end_line: section.end_line,
        step,
    })
}

/// Node-local edit path: replace the editable region inside a fragment the
/// node already holds from its last render.
///
/// The caller splices the returned fragment back into wherever it stores
/// per-node code; no document re-parse is involved.
pub fn apply_fragment_edit(fragment: &str, new_interior: &str) -> String {
    replace_region(fragment, new_interior)
}

/// Full-document edit path: resolve the identity's section, replace its
/// editable region, and splice the updated section back over its recorded
/// line range.
///
/// The document is returned unchanged when the identity resolves to no
/// marker, no section carries the marker, or the section has no well-formed
/// region.
pub fn apply_node_edit(document: &str, identity: &NodeIdentity, new_interior: &str) -> String {
    let Some(marker) = resolve_marker(identity) else {
        return document.to_string();
    };
    let sections = extract_sections(document);
    let Some(section) = sections.iter().find(|s| s.node_marker == marker) else {
        return document.to_string();
    };
    if find_region(&section.content).is_none() {
        return document.to_string();
    }
    let updated = replace_region(&section.content, new_interior);
    splice_section(document, section, &updated)
}

/// Substitute new content over a section's line range.
///
/// A straightforward line-range splice using the `start_line..=end_line`
/// recorded at parse time; the trailing-newline state of the document is
/// preserved.
pub fn splice_section(document: &str, section: &Section, new_content: &str) -> String {
    splice_lines(document, section.start_line, section.end_line, new_content)
}

fn splice_lines(document: &str, start_line: usize, end_line: usize, replacement: &str) -> String {
    let lines = document_lines(document);
    let start = start_line.min(lines.len());
    let mut pieces: Vec<&str> = Vec::with_capacity(lines.len());
    pieces.extend_from_slice(&lines[..start]);
    pieces.extend(replacement.split('\n'));
    if end_line + 1 < lines.len() {
        pieces.extend_from_slice(&lines[end_line + 1..]);
    }
    let mut result = pieces.join("\n");
    if document.ends_with('\n') {
        result.push('\n');
    }
    result
}
