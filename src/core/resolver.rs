use serde_json::Value;

use crate::core::extract::extract_json_object;

/// Minimum model score (0-100) for a candidate to count as a match
pub const MATCH_THRESHOLD: f64 = 40.0;

/// Turn raw model output into the thresholded id list.
///
/// The output is expected to contain one JSON object of shape
/// `{ "items": [{ "id": number, "score": number }, ...] }`, already sorted
/// descending by score. Entries whose `id` is not an unsigned integer or
/// whose `score` is not a number are dropped; model ordering is preserved
/// for the rest. Unparseable output yields an empty list - that is a
/// recoverable condition, not an error.
pub fn resolve_match_ids(raw: &str) -> Vec<u64> {
    let Some(json) = extract_json_object(raw) else {
        return Vec::new();
    };

    let Ok(parsed) = serde_json::from_str::<Value>(json) else {
        tracing::debug!("Model output contained braces but no valid JSON");
        return Vec::new();
    };

    let Some(items) = parsed.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let id = item.get("id")?.as_u64()?;
            let score = item.get("score")?.as_f64()?;
            (score >= MATCH_THRESHOLD).then_some(id)
        })
        .collect()
}
