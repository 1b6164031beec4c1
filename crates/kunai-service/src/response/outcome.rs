use super::DavResponse;

/// Result of a gate step: keep going with a value, or stop with a response.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Continue(T),
    Terminate(DavResponse),
}

impl<T> Outcome<T> {
    /// The terminal response, if any.
    #[must_use]
    pub fn into_response(self) -> Option<DavResponse> {
        match self {
            Self::Continue(_) => None,
            Self::Terminate(response) => Some(response),
        }
    }
}
