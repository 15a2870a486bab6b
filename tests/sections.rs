//! Integration tests for section extraction over whole documents
//!
//! Boundary semantics under test: a section runs from its node marker to the
//! line before the next marker of either kind, step marker lines belong to no
//! section, and absence of structure degrades to an empty section list.

use qflow::qflow::section::{document_lines, extract_sections, scan_step_markers, Section};
use qflow::qflow::testing::{BELL, PLAIN_SCRIPT, STEP_ONLY, WORKFLOW};

fn assert_section(
    section: &Section,
    node_marker: &str,
    step: u32,
    start_line: usize,
    end_line: usize,
) {
    assert_eq!(section.node_marker, node_marker);
    assert_eq!(section.step, step);
    assert_eq!(section.start_line, start_line, "start of {node_marker:?}");
    assert_eq!(section.end_line, end_line, "end of {node_marker:?}");
}

#[test]
fn test_two_adjacent_sections_share_a_boundary() {
    let document = "## STEP 1 : Map\n###[A]\nfoo\n###[B]\nbar\n";
    let sections = extract_sections(document);
    assert_eq!(sections.len(), 2);
    assert_section(&sections[0], "A", 1, 1, 2);
    assert_eq!(sections[0].content, "###[A]\nfoo");
    assert_section(&sections[1], "B", 1, 3, 4);
    assert_eq!(sections[1].content, "###[B]\nbar");
}

#[test]
fn test_workflow_document_layout() {
    let sections = extract_sections(WORKFLOW);
    assert_eq!(sections.len(), 6);
    assert_section(&sections[0], "Graph to Hamiltonian", 1, 7, 18);
    assert_section(&sections[1], "QAOA Circuit", 1, 19, 22);
    assert_section(&sections[2], "Transpiler", 2, 24, 27);
    assert_section(&sections[3], "Estimator", 3, 29, 33);
    assert_section(&sections[4], "Sampler", 3, 34, 38);
    assert_section(&sections[5], "RAW", 4, 40, 42);
}

#[test]
fn test_section_titles_come_from_the_owning_step() {
    let sections = extract_sections(WORKFLOW);
    assert_eq!(sections[0].title, "Mapping the problem");
    assert_eq!(sections[2].title, "Optimize Circuit");
    assert_eq!(sections[5].title, "Post-process");
}

#[test]
fn test_content_is_the_exact_line_slice() {
    let sections = extract_sections(WORKFLOW);
    let estimator = &sections[3];
    assert_eq!(
        estimator.content,
        "###[Estimator]\nestimator = Estimator(mode=backend)\nestimator.options.resilience_level = 1\njob = estimator.run([pub])\n"
    );
}

#[test]
fn test_last_section_extends_to_end_of_document() {
    let sections = extract_sections(BELL);
    assert_eq!(sections.len(), 2);
    assert_section(&sections[1], "CHSH Observables", 1, 5, 6);
}

#[test]
fn test_document_without_node_markers_yields_no_sections() {
    assert_eq!(extract_sections(PLAIN_SCRIPT), vec![]);
    assert_eq!(extract_sections(STEP_ONLY), vec![]);
    assert_eq!(extract_sections(""), vec![]);
}

#[test]
fn test_consecutive_step_markers_emit_no_section() {
    let document = "## STEP 1 : Map\n## STEP 2 : Opt\n###[A]\nfoo\n";
    let sections = extract_sections(document);
    assert_eq!(sections.len(), 1);
    assert_section(&sections[0], "A", 2, 2, 3);
}

#[test]
fn test_malformed_marker_lines_become_content() {
    let document = "###[A]\n###[missing bracket\n## STEP : no number\nfoo\n";
    let sections = extract_sections(document);
    assert_eq!(sections.len(), 1);
    assert_eq!(
        sections[0].content,
        "###[A]\n###[missing bracket\n## STEP : no number\nfoo"
    );
}

#[test]
fn test_later_step_marker_becomes_current_step() {
    // Step numbers need not be monotonic or unique
    let document = "## STEP 3 : Execute\n###[A]\nx\n## STEP 1 : Map\n###[B]\ny\n";
    let sections = extract_sections(document);
    assert_eq!(sections[0].step, 3);
    assert_eq!(sections[1].step, 1);
}

#[test]
fn test_extraction_is_idempotent() {
    assert_eq!(extract_sections(WORKFLOW), extract_sections(WORKFLOW));
    assert_eq!(extract_sections(BELL), extract_sections(BELL));
}

#[test]
fn test_trailing_newline_does_not_change_boundaries() {
    let with_newline = "###[A]\nfoo\n";
    let without_newline = "###[A]\nfoo";
    assert_eq!(
        extract_sections(with_newline),
        extract_sections(without_newline)
    );
}

#[test]
fn test_sections_and_step_lines_cover_the_document() {
    // Every line of a canonical document (content only after node markers) is
    // either a step marker line or inside exactly one section.
    for document in [BELL, "## STEP 1 : Map\n###[A]\nfoo\n###[B]\nbar\n"] {
        let lines = document_lines(document);
        let sections = extract_sections(document);
        let steps = scan_step_markers(document);

        let mut pieces: Vec<(usize, String)> = sections
            .iter()
            .map(|s| (s.start_line, s.content.clone()))
            .collect();
        pieces.extend(
            steps
                .iter()
                .map(|m| (m.line_index, lines[m.line_index].to_string())),
        );
        pieces.sort_by_key(|(line, _)| *line);

        let reconstructed = pieces
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(reconstructed, lines.join("\n"));
    }
}

#[test]
fn test_scan_step_markers_reports_every_step() {
    let markers = scan_step_markers(WORKFLOW);
    let numbers: Vec<u32> = markers.iter().map(|m| m.number).collect();
    assert_eq!(numbers, vec![0, 1, 2, 3, 4]);
    assert_eq!(markers[0].title, "IBM Quantum Config");
    assert_eq!(markers[0].line_index, 0);
    assert_eq!(markers[4].line_index, 39);
}
