//! Section Extractor
//!
//! Slices a whole marked document into per-node sections with a single pass
//! over its lines. The scan carries an explicit accumulator (current step,
//! open section, finished sections) so the boundary rules are easy to state:
//!
//! 1. A step marker line closes any open section, updates the current step
//!    and belongs to no section.
//! 2. A node marker line closes any open section and opens a new one starting
//!    at the marker line itself.
//! 3. Every other line extends the open section, or is ignored when no
//!    section is open (preamble content before the first node marker).
//!
//! By construction no step or node marker line ever appears strictly inside a
//! section's line range. A document with zero node markers yields an empty
//! section list; that is a valid result, not an error.

use serde::Serialize;

use crate::qflow::grammar::{classify_line, MarkerLine};

/// A `## STEP` marker found in a document.
///
/// Step numbers are whatever integer appears in the marker text; neither
/// monotonicity nor uniqueness is enforced. A later step marker simply becomes
/// the current step for subsequently seen node markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepMarker {
    pub line_index: usize,
    pub number: u32,
    pub title: String,
}

/// The contiguous block of text owned by one node marker.
///
/// `start_line` is the line of the node marker itself; `end_line` is the line
/// immediately preceding the next marker of either kind, or the last line of
/// the document. `content` is the exact slice of lines
/// `[start_line, end_line]` joined by `\n` - no trimming, no marker
/// stripping. `title` is the owning step's title. Sections are views,
/// recomputed from scratch on every parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub step: u32,
    pub title: String,
    pub start_line: usize,
    pub end_line: usize,
    pub content: String,
    pub node_marker: String,
}

/// Split a document into lines.
///
/// Lines are `\n`-separated; the single empty segment produced by a trailing
/// newline is dropped, so `"a\nb\n"` and `"a\nb"` have the same lines.
/// Interior blank lines are preserved.
pub fn document_lines(document: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = document.split('\n').collect();
    if lines.len() > 1 && lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Explicit accumulator for the single-pass section scan.
struct SectionScan {
    current_step: u32,
    current_title: String,
    open: Option<OpenSection>,
    sections: Vec<Section>,
}

struct OpenSection {
    step: u32,
    title: String,
    start_line: usize,
    node_marker: String,
}

impl SectionScan {
    fn new() -> Self {
        Self {
            current_step: 0,
            current_title: String::new(),
            open: None,
            sections: Vec::new(),
        }
    }

    /// Close the open section so that it ends on `end_line`.
    fn close_open(&mut self, end_line: usize, lines: &[&str]) {
        if let Some(open) = self.open.take() {
            self.sections.push(Section {
                step: open.step,
                title: open.title,
                start_line: open.start_line,
                end_line,
                content: lines[open.start_line..=end_line].join("\n"),
                node_marker: open.node_marker,
            });
        }
    }

    fn step_marker(&mut self, index: usize, number: u32, title: String, lines: &[&str]) {
        if index > 0 {
            self.close_open(index - 1, lines);
        }
        self.current_step = number;
        self.current_title = title;
    }

    fn node_marker(&mut self, index: usize, name: String, lines: &[&str]) {
        if index > 0 {
            self.close_open(index - 1, lines);
        }
        self.open = Some(OpenSection {
            step: self.current_step,
            title: self.current_title.clone(),
            start_line: index,
            node_marker: name,
        });
    }

    fn finish(mut self, lines: &[&str]) -> Vec<Section> {
        if !lines.is_empty() {
            self.close_open(lines.len() - 1, lines);
        }
        self.sections
    }
}

/// Extract every node section of a document, in document order.
pub fn extract_sections(document: &str) -> Vec<Section> {
    let lines = document_lines(document);
    let mut scan = SectionScan::new();
    for (index, line) in lines.iter().enumerate() {
        match classify_line(line) {
            Some(MarkerLine::Step { number, title }) => {
                scan.step_marker(index, number, title, &lines);
            }
            Some(MarkerLine::Node { name }) => {
                scan.node_marker(index, name, &lines);
            }
            _ => {}
        }
    }
    scan.finish(&lines)
}

/// Collect every step marker of a document, in document order.
pub fn scan_step_markers(document: &str) -> Vec<StepMarker> {
    document_lines(document)
        .iter()
        .enumerate()
        .filter_map(|(line_index, line)| match classify_line(line) {
            Some(MarkerLine::Step { number, title }) => Some(StepMarker {
                line_index,
                number,
                title,
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lines_drops_single_trailing_empty_segment() {
        assert_eq!(document_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(document_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(document_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(document_lines(""), vec![""]);
    }

    #[test]
    fn test_step_marker_line_belongs_to_no_section() {
        let sections = extract_sections("## STEP 1 : Map\n###[A]\nfoo\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start_line, 1);
        assert_eq!(sections[0].content, "###[A]\nfoo");
    }

    #[test]
    fn test_no_marker_line_inside_a_section_range() {
        let document = "## STEP 1 : Map\n###[A]\nfoo\n## STEP 2 : Opt\n###[B]\nbar\n";
        for section in extract_sections(document) {
            let interior: Vec<&str> = section
                .content
                .split('\n')
                .skip(1)
                .collect();
            for line in interior {
                assert!(
                    !crate::qflow::grammar::is_section_boundary(line),
                    "marker line {line:?} inside section {:?}",
                    section.node_marker
                );
            }
        }
    }

    #[test]
    fn test_preamble_before_first_node_marker_is_ignored() {
        let document = "import numpy as np\nprint('hi')\n###[A]\nfoo\n";
        let sections = extract_sections(document);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start_line, 2);
        assert_eq!(sections[0].step, 0);
        assert_eq!(sections[0].title, "");
    }

    #[test]
    fn test_scan_step_markers() {
        let markers = scan_step_markers("## STEP 0 : Config\nx = 1\n## STEP 3 : Execute\n");
        assert_eq!(
            markers,
            vec![
                StepMarker {
                    line_index: 0,
                    number: 0,
                    title: "Config".to_string()
                },
                StepMarker {
                    line_index: 2,
                    number: 3,
                    title: "Execute".to_string()
                },
            ]
        );
    }
}
