//! Permission resolution for the request gate.
//!
//! ## Module Organization
//!
//! - `activity`: Operations a handler asks about and the capabilities that satisfy them
//! - `capability`: Capabilities and the per-request `PermissionSet` bitset
//! - `permission`: Derivation of the caller's `PermissionSet` for a target identity
//! - `privilege`: `DAV:supported-privilege-set` generation

pub mod activity;
pub mod capability;
pub mod permission;
pub mod privilege;

pub use activity::Activity;
pub use capability::{Capability, PermissionSet};
pub use permission::resolve_permissions;
pub use privilege::{SUPPORTED_PRIVILEGES, supported_privilege_set_xml};
