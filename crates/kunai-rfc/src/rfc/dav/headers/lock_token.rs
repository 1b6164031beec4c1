//! `Lock-Token` header (RFC 4918 §10.5).

/// URI scheme of server-issued lock tokens.
pub const OPAQUE_LOCK_TOKEN_SCHEME: &str = "opaquelocktoken:";

/// ## Summary
/// Extracts `TOKEN` from `<opaquelocktoken:TOKEN>`.
///
/// Anything else, including an empty token, yields `None`.
#[must_use]
pub fn parse(header: Option<&str>) -> Option<String> {
    let token = header?
        .trim()
        .strip_prefix('<')?
        .strip_suffix('>')?
        .trim()
        .strip_prefix(OPAQUE_LOCK_TOKEN_SCHEME)?
        .trim();

    (!token.is_empty()).then(|| token.to_string())
}
