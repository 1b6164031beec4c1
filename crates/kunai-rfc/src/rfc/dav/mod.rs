//! RFC 4918 / RFC 4791 request and response building blocks.

pub mod build;
pub mod core;
pub mod headers;
pub mod parse;
