use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::ExtractError;

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?i)```(?:json)?").expect("fence marker regex"))
}

/// Strips markdown code-fence markers and surrounding whitespace, then
/// attempts a strict JSON parse. Deliberately no lenient parsing (no JSON5,
/// no trailing-comma tolerance): a malformed reply must fail loudly here and
/// be replaced by the fallback record, never be misinterpreted.
pub fn sanitize(raw: &str) -> Result<Value, ExtractError> {
    let cleaned = fence_regex().replace_all(raw, "");
    serde_json::from_str(cleaned.trim()).map_err(|_| ExtractError::NotJson)
}
