//! `If-Match` / `If-None-Match` evaluation (RFC 7232 §6).

use kunai_rfc::rfc::dav::core::DavMethod;
use kunai_rfc::rfc::dav::headers::etag::list_matches;

/// What a handler should do after evaluating preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    Proceed,
    /// 412
    PreconditionFailed,
    /// 304, only for `GET` and `HEAD`.
    NotModified,
}

/// The request's ETag preconditions, quotes already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalRequest {
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    safe_method: bool,
}

impl ConditionalRequest {
    #[must_use]
    pub fn new(if_match: Option<String>, if_none_match: Option<String>, method: &DavMethod) -> Self {
        Self {
            if_match,
            if_none_match,
            safe_method: matches!(method, DavMethod::Get | DavMethod::Head),
        }
    }

    /// Whether either header was sent.
    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        self.if_match.is_some() || self.if_none_match.is_some()
    }

    /// ## Summary
    /// Evaluates the preconditions against the resource's current ETag.
    ///
    /// `current_etag` is `None` when the resource does not exist. `If-Match`
    /// is checked first and fails on a missing resource even for `*`.
    /// A matching `If-None-Match` yields `NotModified` for `GET`/`HEAD`
    /// and `PreconditionFailed` otherwise.
    #[must_use]
    pub fn evaluate(&self, current_etag: Option<&str>) -> Precondition {
        if let Some(if_match) = &self.if_match {
            let matched = current_etag.is_some_and(|etag| list_matches(if_match, etag));
            if !matched {
                return Precondition::PreconditionFailed;
            }
        }

        if let Some(if_none_match) = &self.if_none_match
            && current_etag.is_some_and(|etag| list_matches(if_none_match, etag))
        {
            return if self.safe_method {
                Precondition::NotModified
            } else {
                Precondition::PreconditionFailed
            };
        }

        Precondition::Proceed
    }
}
