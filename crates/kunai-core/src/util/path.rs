//! Segment-level helpers for slash-rooted DAV paths.
//!
//! ## Summary
//! DAV paths are compared segment by segment rather than as raw strings, so
//! `/alice/cal/` is an ancestor of `/alice/cal/event.ics` but not of
//! `/alice/calendar/`.

/// How one path relates to another when both are split into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRelation {
    /// Both paths name the same node.
    Same,
    /// The first path contains the second `n` levels down.
    Ancestor(usize),
    /// The first path lives `n` levels below the second.
    Descendant(usize),
}

/// Iterates the non-empty segments of `path`.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Returns the first non-empty segment, if any.
#[must_use]
pub fn first_segment(path: &str) -> Option<&str> {
    segments(path).next()
}

/// Returns the last non-empty segment, if any.
#[must_use]
pub fn last_segment(path: &str) -> Option<&str> {
    segments(path).last()
}

/// ## Summary
/// Relates `base` to `other`, or returns `None` when neither contains the other.
#[must_use]
pub fn relation(base: &str, other: &str) -> Option<PathRelation> {
    let base_segments: Vec<&str> = segments(base).collect();
    let other_segments: Vec<&str> = segments(other).collect();

    let shared = base_segments
        .iter()
        .zip(other_segments.iter())
        .take_while(|(a, b)| a == b)
        .count();

    match (base_segments.len(), other_segments.len()) {
        (b, o) if shared == b && shared == o => Some(PathRelation::Same),
        (b, o) if shared == b => Some(PathRelation::Ancestor(o - b)),
        (b, o) if shared == o => Some(PathRelation::Descendant(b - o)),
        _ => None,
    }
}

/// ## Summary
/// Returns `path` and every collection path above it, root first.
///
/// `/alice/cal/event.ics` yields `/`, `/alice/`, `/alice/cal/`, `/alice/cal/event.ics`.
#[must_use]
pub fn self_and_ancestors(path: &str) -> Vec<String> {
    let parts: Vec<&str> = segments(path).collect();
    let mut result = Vec::with_capacity(parts.len() + 1);
    let mut current = String::from("/");
    result.push(current.clone());

    for (idx, part) in parts.iter().enumerate() {
        current.push_str(part);
        let is_last = idx + 1 == parts.len();
        if is_last && !path.ends_with('/') {
            result.push(current.clone());
        } else {
            current.push('/');
            result.push(current.clone());
        }
    }

    result.dedup();
    result
}

/// Returns `true` for a path of exactly one non-empty segment followed by `/`.
#[must_use]
pub fn is_principal_path(path: &str) -> bool {
    path.strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .is_some_and(|name| !name.is_empty() && !name.contains('/'))
}
