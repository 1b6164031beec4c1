//! `WebDAV` request body parsing.

mod propfind;

pub use propfind::requested_properties;
