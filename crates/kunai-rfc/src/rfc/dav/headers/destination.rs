//! `Destination` header (RFC 4918 §10.3).

/// ## Summary
/// Reduces a `Destination` URI to a path below `root`.
///
/// The scheme, authority, query and fragment are dropped, then `root` (for
/// example `/dav`) is stripped. Returns `None` for an absent or empty header.
#[must_use]
pub fn parse(header: Option<&str>, root: &str) -> Option<String> {
    let raw = header?.trim();
    if raw.is_empty() {
        return None;
    }

    let path = match raw.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |idx| &rest[idx..]),
        None => raw,
    };
    let path = path.split(['?', '#']).next().unwrap_or(path);

    let relative = match path.strip_prefix(root) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    };

    if relative.is_empty() {
        Some("/".to_string())
    } else if relative.starts_with('/') {
        Some(relative.to_string())
    } else {
        Some(format!("/{relative}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_uri_is_reduced() {
        assert_eq!(
            parse(Some("https://dav.example.com/dav/alice/cal/x.ics"), "/dav").as_deref(),
            Some("/alice/cal/x.ics")
        );
        assert_eq!(
            parse(Some("http://host:8698/dav"), "/dav").as_deref(),
            Some("/")
        );
    }

    #[test]
    fn absolute_path_is_accepted() {
        assert_eq!(
            parse(Some("/dav/alice/new/?x=1"), "/dav").as_deref(),
            Some("/alice/new/")
        );
        assert_eq!(
            parse(Some("/davids/x"), "/dav").as_deref(),
            Some("/davids/x")
        );
    }

    #[test]
    fn absent_or_empty() {
        assert_eq!(parse(None, "/dav"), None);
        assert_eq!(parse(Some("  "), "/dav"), None);
    }
}
