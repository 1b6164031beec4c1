//! `If-Match` / `If-None-Match` values (RFC 7232 §3.1, §3.2).

/// ## Summary
/// Strips every `"` from the header value.
///
/// Returns `None` when the header is absent or nothing is left.
#[must_use]
pub fn normalize(header: Option<&str>) -> Option<String> {
    let stripped: String = header?.chars().filter(|c| *c != '"').collect();
    let stripped = stripped.trim();
    (!stripped.is_empty()).then(|| stripped.to_string())
}

/// ## Summary
/// Checks a normalized etag list against `current`.
///
/// Entries are comma separated. `*` matches any existing resource and the
/// weak prefix `W/` is ignored.
#[must_use]
pub fn list_matches(list: &str, current: &str) -> bool {
    let current = strip_weak(current.trim().trim_matches('"'));
    list.split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || strip_weak(candidate) == current)
}

fn strip_weak(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}
