//! Request context construction.
//!
//! Headers and path are normalized first, then the caller's permissions
//! against the addressed identity are resolved. The result is a
//! `RequestContext` that handlers query but never modify.

pub mod context;
pub mod headers;
pub mod identity;
pub mod path;

pub use context::{GateRequest, RequestContext};
pub use headers::{NormalizedHeaders, RawHeaders};
pub use identity::{CallerIdentity, Identity};
pub use path::ResolvedPath;
