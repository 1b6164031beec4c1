pub mod auth;
pub mod conditional;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fixture;
pub mod lock;
pub mod request;
pub mod response;
