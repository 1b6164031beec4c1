use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] kunai_service::error::ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] kunai_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),

    #[error("Caller could not be authenticated: {0}")]
    Unauthenticated(String),
}

impl AppError {
    /// HTTP status the error maps to when it ends a request.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Unauthenticated(_) => 401,
            Self::ServiceError(_) | Self::DatabaseError(_) | Self::CoreError(_) => 500,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
