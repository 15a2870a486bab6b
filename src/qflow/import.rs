//! Graph Importer
//!
//! Converts an entire marked document into visual-node descriptors, one per
//! node marker, for bootstrapping a graph from a pre-written script. Also
//! captures the optional STEP 0 preamble, a configuration block that belongs
//! to no node.
//!
//! Layout positions are purely cosmetic: one column per step, one row per
//! node within its step, stable for a given input. Nothing downstream may
//! depend on them beyond that stability.

use serde::Serialize;

use crate::qflow::region::find_region;
use crate::qflow::section::{document_lines, extract_sections, scan_step_markers};

const COLUMN_WIDTH: i32 = 320;
const ROW_HEIGHT: i32 = 180;
const MARGIN: i32 = 40;

/// Canvas coordinates assigned to an imported node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// One visual node synthesized from a node marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub id: String,
    pub title: String,
    pub python_code: String,
    pub input_code: Option<String>,
    pub step: u32,
    pub category: String,
    pub position: Position,
}

/// The result of importing a marked document.
///
/// A document with no node markers imports zero nodes and no config block;
/// that is a valid, non-error result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ImportedGraph {
    pub nodes: Vec<NodeDescriptor>,
    pub step0_config: Option<String>,
}

/// Import a whole marked document into node descriptors.
pub fn import_document(document: &str, id_prefix: &str) -> ImportedGraph {
    let sections = extract_sections(document);
    let mut rows_per_step: Vec<(u32, i32)> = Vec::new();
    let nodes = sections
        .iter()
        .map(|section| {
            let row = next_row(&mut rows_per_step, section.step);
            NodeDescriptor {
                id: format!("{}{}", id_prefix, slug(&section.node_marker)),
                title: section.node_marker.clone(),
                python_code: section.content.trim().to_string(),
                input_code: find_region(&section.content).map(|split| split.interior),
                step: section.step,
                category: infer_category(section.step, &section.node_marker),
                position: Position {
                    x: MARGIN + section.step as i32 * COLUMN_WIDTH,
                    y: MARGIN + row * ROW_HEIGHT,
                },
            }
        })
        .collect();
    ImportedGraph {
        nodes,
        step0_config: step0_config(document),
    }
}

/// Capture the STEP 0 preamble: the body lines between a `## STEP 0` marker
/// and the next step marker or end of document, trimmed. The marker line
/// itself is excluded; an empty body counts as absent.
pub fn step0_config(document: &str) -> Option<String> {
    let markers = scan_step_markers(document);
    let index = markers.iter().position(|marker| marker.number == 0)?;
    let lines = document_lines(document);
    let start = markers[index].line_index + 1;
    let end = markers
        .get(index + 1)
        .map(|marker| marker.line_index)
        .unwrap_or(lines.len());
    if start >= end {
        return None;
    }
    let body = lines[start..end].join("\n").trim().to_string();
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

/// Stable identifier fragment derived from a node marker title: lowercase,
/// runs of non-alphanumerics collapsed to single dashes.
fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Infer a node category from the step plus keyword heuristics on the marker
/// title. Keyword matches win over the per-step defaults.
fn infer_category(step: u32, marker: &str) -> String {
    let lowered = marker.to_ascii_lowercase();
    let keyword = [
        ("hamiltonian", "Hamiltonian"),
        ("observable", "Observable"),
        ("circuit", "Circuit"),
        ("ansatz", "Circuit"),
        ("transpil", "Transpiler"),
        ("estimator", "Estimator"),
        ("sampler", "Sampler"),
    ]
    .iter()
    .find(|(needle, _)| lowered.contains(needle))
    .map(|(_, category)| *category);
    if let Some(category) = keyword {
        return category.to_string();
    }
    match step {
        1 => "Mapping",
        2 => "Optimization",
        3 => "Execution",
        4 => "Visualization",
        _ => "General",
    }
    .to_string()
}

fn next_row(rows_per_step: &mut Vec<(u32, i32)>, step: u32) -> i32 {
    if let Some(entry) = rows_per_step.iter_mut().find(|(s, _)| *s == step) {
        let row = entry.1;
        entry.1 += 1;
        return row;
    }
    rows_per_step.push((step, 1));
    0
}
