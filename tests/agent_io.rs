//! Integration tests for the agent-facing text surfaces
//!
//! Fence extraction turns a chat reply into a splice-ready payload; the
//! RESULT-line protocol turns captured sandbox output into a structured
//! payload. Both fail soft on absent or malformed input.

use qflow::qflow::document::apply_fragment_edit;
use qflow::qflow::fenced::extract_python_fences;
use qflow::qflow::results::parse_result_line;
use qflow::qflow::testing::AGENT_REPLY;
use serde_json::json;

#[test]
fn test_reply_fences_are_joined_in_order() {
    assert_eq!(
        extract_python_fences(AGENT_REPLY),
        "edge_list = [(0, 1, 1.0), (1, 2, 1.0)]\ngraph.add_nodes_from(np.arange(0, 3, 1))"
    );
}

#[test]
fn test_fenceless_reply_yields_empty_payload() {
    assert_eq!(extract_python_fences("No code needed here."), "");
}

#[test]
fn test_other_languages_are_ignored() {
    let reply = "```bash\nls\n```\n```python\nx = 1\n```";
    assert_eq!(extract_python_fences(reply), "x = 1");
}

#[test]
fn test_extracted_fences_splice_into_a_fragment() {
    let fragment = "###[Graph to Hamiltonian]\n#### INPUT PYTHON\nold\n#### END INPUT PYTHON";
    let payload = extract_python_fences(AGENT_REPLY);
    let updated = apply_fragment_edit(fragment, &payload);
    assert_eq!(
        updated,
        "###[Graph to Hamiltonian]\n#### INPUT PYTHON\nedge_list = [(0, 1, 1.0), (1, 2, 1.0)]\ngraph.add_nodes_from(np.arange(0, 3, 1))\n#### END INPUT PYTHON"
    );
}

#[test]
fn test_result_line_parsing() {
    let output = "Cost Function Hamiltonian: ...\nRESULT: {\"type\":\"graph\",\"content\":{\"nodes\":5,\"bitstring\":[1,0,1,0,1]}}\n";
    let payload = parse_result_line(output).unwrap();
    assert_eq!(payload.kind, "graph");
    assert_eq!(payload.content, json!({"nodes": 5, "bitstring": [1, 0, 1, 0, 1]}));
}

#[test]
fn test_last_result_line_wins() {
    let output = "RESULT: {\"type\":\"text\",\"content\":\"first\"}\nRESULT: {\"type\":\"text\",\"content\":\"second\"}\n";
    assert_eq!(parse_result_line(output).unwrap().content, json!("second"));
}

#[test]
fn test_absent_or_malformed_results_are_none() {
    assert_eq!(parse_result_line("plain output\n"), None);
    assert_eq!(parse_result_line("RESULT: {broken\n"), None);
    assert_eq!(parse_result_line(""), None);
}
