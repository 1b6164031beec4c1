//! `WebDAV`/`CalDAV` protocol types, header parsing and XML bodies.

pub mod error;
pub mod rfc;
