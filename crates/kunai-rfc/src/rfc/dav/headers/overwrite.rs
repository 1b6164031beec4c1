//! `Overwrite` header (RFC 4918 §10.6).

/// `F` (any case) disables overwriting. Absent or anything else enables it.
#[must_use]
pub fn parse(header: Option<&str>) -> bool {
    !header.is_some_and(|value| value.trim().eq_ignore_ascii_case("f"))
}
