//! Result-Line Protocol
//!
//! A generated script reports structured output by printing a final line of
//! the form `RESULT: {"type": "...", "content": ...}` among its ordinary
//! stdout. The composer scans captured sandbox output for the last such line
//! and renders the payload (a plot, a graph, plain text) accordingly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const RESULT_PREFIX: &str = "RESULT: ";

/// The structured payload a script reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Value,
}

/// Find the last `RESULT: ` line in captured output and deserialize its
/// payload. Output without such a line, or with a malformed payload, is
/// `None`.
pub fn parse_result_line(output: &str) -> Option<ResultPayload> {
    let line = output
        .lines()
        .rev()
        .find(|line| line.trim_start().starts_with(RESULT_PREFIX))?;
    let json = line.trim_start().strip_prefix(RESULT_PREFIX)?;
    serde_json::from_str(json).ok()
}
