//! Template-variable extraction for prompt content.
//!
//! Prompt content may embed `{{variable}}` placeholders that consumers
//! substitute at use time. Extraction is advisory: malformed braces are
//! ignored, never rejected.

use std::sync::LazyLock;

use regex::Regex;

/// Regex pattern matching `{{variable}}` tokens in prompt content.
pub const VARIABLE_PATTERN: &str = r"\{\{(\w+)\}\}";

/// Compiled regex for `{{variable}}` extraction. Compiled once, reused forever.
static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VARIABLE_PATTERN).expect("valid regex"));

/// Extract all `{{variable}}` names from prompt content.
///
/// Returns a de-duplicated, sorted list of variable names (without braces).
/// Anything between the braces other than word characters disqualifies the
/// token, so `{{}}`, `{{bad name}}`, and an unclosed `{{` yield nothing.
pub fn extract_variables(content: &str) -> Vec<String> {
    let mut variables: Vec<String> = VARIABLE_RE
        .captures_iter(content)
        .map(|c| c[1].to_string())
        .collect();
    variables.sort();
    variables.dedup();
    variables
}
