//! `WebDAV` lock checks for a single request.

mod manager;
pub mod scope;

pub use manager::LockManager;
pub use scope::LockRank;
