//! `Timeout` header (RFC 4918 §10.7).

/// A parsed `Timeout` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutRequest {
    /// Candidates in the order the client listed them, trimmed.
    pub candidates: Vec<String>,
    /// Timeout in seconds the server settled on.
    pub effective: u64,
}

impl TimeoutRequest {
    /// ## Summary
    /// Parses a `Timeout` header and resolves the effective timeout.
    ///
    /// Candidates are tried in order and the first that resolves wins.
    /// `Infinite` yields `maximum`. `Second-<n>` yields `max(n, maximum)`, with
    /// an unparseable `n` read as zero. When nothing resolves, `default` is used.
    /// Returns `None` when the header is absent.
    #[must_use]
    pub fn parse(header: Option<&str>, maximum: u64, default: u64) -> Option<Self> {
        let raw = header?;

        let candidates: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToString::to_string)
            .collect();

        let effective = candidates
            .iter()
            .find_map(|candidate| resolve_candidate(candidate, maximum))
            .unwrap_or(default);

        Some(Self {
            candidates,
            effective,
        })
    }
}

fn resolve_candidate(candidate: &str, maximum: u64) -> Option<u64> {
    let lower = candidate.to_ascii_lowercase();
    if lower == "infinite" {
        return Some(maximum);
    }

    lower.strip_prefix("second-").map(|seconds| {
        let requested = seconds.trim().parse::<u64>().unwrap_or(0);
        requested.max(maximum)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAXIMUM: u64 = 8_640_000;
    const DEFAULT: u64 = 900;

    #[test]
    fn absent_header() {
        assert_eq!(TimeoutRequest::parse(None, MAXIMUM, DEFAULT), None);
    }

    #[test]
    fn seconds_never_go_below_the_maximum() {
        let timeout = TimeoutRequest::parse(Some("Second-30"), MAXIMUM, DEFAULT);
        assert_eq!(timeout.map(|t| t.effective), Some(MAXIMUM));

        let timeout = TimeoutRequest::parse(Some("Second-9000000"), MAXIMUM, DEFAULT);
        assert_eq!(timeout.map(|t| t.effective), Some(9_000_000));
    }

    #[test]
    fn infinite_uses_maximum() {
        let timeout = TimeoutRequest::parse(Some("Infinite"), MAXIMUM, DEFAULT);
        assert_eq!(timeout.map(|t| t.effective), Some(MAXIMUM));
    }

    #[test]
    fn first_resolving_candidate_wins() {
        let Some(timeout) =
            TimeoutRequest::parse(Some(" bogus , second-10, Infinite"), 60, DEFAULT)
        else {
            panic!("header present");
        };
        assert_eq!(timeout.candidates, vec!["bogus", "second-10", "Infinite"]);
        assert_eq!(timeout.effective, 60);
    }

    #[test]
    fn unparseable_seconds_count_as_zero() {
        let timeout = TimeoutRequest::parse(Some("Second-soon"), 120, DEFAULT);
        assert_eq!(timeout.map(|t| t.effective), Some(120));
    }

    #[test]
    fn nothing_resolves_uses_default() {
        let timeout = TimeoutRequest::parse(Some("Minute-5, forever"), MAXIMUM, DEFAULT);
        assert_eq!(timeout.map(|t| t.effective), Some(DEFAULT));

        let timeout = TimeoutRequest::parse(Some(""), MAXIMUM, DEFAULT);
        assert_eq!(timeout.map(|t| t.effective), Some(DEFAULT));
    }
}
