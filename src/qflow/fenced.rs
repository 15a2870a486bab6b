//! Fenced-Code Extractor
//!
//! An AI agent's chat reply wraps generated code in ```` ```python ````
//! fences, usually with prose around and between them. Splicing a reply into
//! an editable region starts by pulling out just the fenced bodies.

use once_cell::sync::Lazy;
use regex::Regex;

static PYTHON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```python\s*\n([\s\S]*?)\n```").unwrap());

/// Extract the bodies of all ```` ```python ```` fences in a reply, joined
/// with newlines. Empty fences are skipped; a reply with no fences yields an
/// empty string.
pub fn extract_python_fences(reply: &str) -> String {
    let blocks: Vec<&str> = PYTHON_FENCE
        .captures_iter(reply)
        .filter_map(|captures| captures.get(1))
        .map(|body| body.as_str())
        .filter(|body| !body.is_empty())
        .collect();
    blocks.join("\n")
}
