//! JS string-literal encoding for payloads handed to the eval bridge.

/// Encode a payload as a JS string literal.
///
/// JSON string encoding is valid JS source with the same escape semantics,
/// so evaluating the literal yields the payload byte-for-byte, including
/// embedded quotes and backslashes. Marker JSON always contains `\"`
/// sequences (popup HTML attributes), so ad-hoc quote escaping is not
/// enough here.
pub fn js_string_literal(payload: &str) -> String {
    serde_json::to_string(payload).unwrap_or_else(|_| "\"\"".to_string())
}
