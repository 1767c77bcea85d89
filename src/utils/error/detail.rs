//! Extraction of the human-readable `detail` from error bodies

use serde_json::Value;

/// Pull a displayable message out of an error response body.
///
/// The backend answers failures with `{"detail": "..."}`. Request validation
/// failures carry a list instead (`{"detail": [{"msg": "...", ...}]}`), whose
/// messages are joined. Anything else falls back to a status-based message.
pub fn extract_detail(status: u16, body: &[u8]) -> String {
    let fallback = || format!("Request failed with status {}", status);

    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return fallback();
    };

    match value.get("detail") {
        Some(Value::String(detail)) if !detail.trim().is_empty() => detail.clone(),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                fallback()
            } else {
                messages.join("; ")
            }
        }
        _ => fallback(),
    }
}
