use thiserror::Error;

use kunai_rfc::error::RfcError;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] kunai_db::error::DbError),

    #[error(transparent)]
    RfcError(RfcError),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),

    #[error("Illegal characters in path: {0}")]
    IllegalPath(String),

    #[error("Invalid {name} header: {value:?}")]
    InvalidHeader { name: &'static str, value: String },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl From<RfcError> for ServiceError {
    fn from(error: RfcError) -> Self {
        match error {
            RfcError::InvalidHeader { name, value } => Self::InvalidHeader { name, value },
            RfcError::MalformedXml(detail) => Self::MalformedBody(detail),
            other => Self::RfcError(other),
        }
    }
}

impl ServiceError {
    /// Whether the error was caused by the request rather than the server.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::IllegalPath(_) | Self::InvalidHeader { .. } | Self::MalformedBody(_)
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
