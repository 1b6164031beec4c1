//! Status-line rendering backed by the canonical HTTP reason table.

use salvo::http::StatusCode;

/// ## Summary
/// Returns the reason phrase for `code`.
///
/// Falls back to `"Unknown Status"` for codes outside the table.
#[must_use]
pub fn reason_phrase(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown Status")
}

/// Formats `HTTP/1.1 <code> <reason>`.
#[must_use]
pub fn status_line(code: u16) -> String {
    format!("HTTP/1.1 {code} {}", reason_phrase(code))
}
