//! Shared configuration, errors and path utilities for the Kunai DAV gate.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
