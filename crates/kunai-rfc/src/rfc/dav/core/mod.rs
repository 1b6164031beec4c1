//! `WebDAV` core types.
//!
//! This module defines the request-side protocol values (`Depth`, methods)
//! and the multistatus model used for lock failure responses.

mod depth;
mod href;
mod method;
mod multistatus;
mod namespace;
pub mod status;

pub use depth::Depth;
pub use href::Href;
pub use method::DavMethod;
pub use multistatus::{Multistatus, Propstat, PropstatResponse, Status};
pub use namespace::{CALDAV_NS, DAV_NS, Namespace, QName, dav_props};
