//! Backend-Config Rewriter
//!
//! A marked document may open with a STEP 0 configuration section that
//! selects the execution backend. Before running a script locally the
//! composer swaps that body for a local-simulator setup; submitting to real
//! hardware swaps it back. Only the STEP 0 body changes: the marker line and
//! every other section are preserved byte-for-byte.
//!
//! Runtime option assignments (`….options.…`) only apply to the cloud
//! primitives, so switching to the local simulator also strips them from the
//! whole script.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::qflow::section::{document_lines, scan_step_markers};

/// The canonical local-simulator configuration body.
pub const LOCAL_SIMULATOR_BODY: &str = "from qiskit_aer import AerSimulator\n\nbackend = AerSimulator()\nprint(\"Using local simulator...\")";

static RUNTIME_OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.options\.").unwrap());

/// Replace the body of the STEP 0 section with `new_body`.
///
/// The body is the run of lines strictly between the `## STEP 0` marker and
/// the next step marker or end of document. The new body is framed by blank
/// lines. A document without a STEP 0 marker is returned unchanged.
pub fn replace_step0_body(document: &str, new_body: &str) -> String {
    let markers = scan_step_markers(document);
    let Some(index) = markers.iter().position(|marker| marker.number == 0) else {
        return document.to_string();
    };
    let lines = document_lines(document);
    let marker_line = markers[index].line_index;
    let end = markers
        .get(index + 1)
        .map(|marker| marker.line_index)
        .unwrap_or(lines.len());

    let mut pieces: Vec<&str> = Vec::with_capacity(lines.len());
    pieces.extend_from_slice(&lines[..=marker_line]);
    pieces.push("");
    pieces.extend(new_body.split('\n'));
    pieces.push("");
    pieces.extend_from_slice(&lines[end..]);
    let mut result = pieces.join("\n");
    if document.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Remove every line carrying a runtime option assignment.
pub fn strip_runtime_options(document: &str) -> String {
    let lines = document_lines(document);
    let kept: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !RUNTIME_OPTION_LINE.is_match(line))
        .collect();
    let mut result = kept.join("\n");
    if document.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Rewrite the document for local simulation: substitute the local-simulator
/// body into STEP 0 and strip runtime options everywhere.
///
/// A document without a STEP 0 section is returned unchanged, runtime
/// options included.
pub fn use_local_simulator(document: &str) -> String {
    let markers = scan_step_markers(document);
    if !markers.iter().any(|marker| marker.number == 0) {
        return document.to_string();
    }
    strip_runtime_options(&replace_step0_body(document, LOCAL_SIMULATOR_BODY))
}
