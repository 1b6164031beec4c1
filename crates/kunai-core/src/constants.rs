/// Route component constants shared across crates
pub const DAV_ROUTE_COMPONENT: &str = "dav";
pub const DAV_ROUTE_PREFIX: &str = const_str::concat!("/", DAV_ROUTE_COMPONENT);

/// Response header identifying the server and schema versions.
pub const VERSION_HEADER: &str = "X-Kunai-Version";

pub const SERVER_NAME: &str = "Kunai";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 100 days, the cap applied to `Timeout: infinite` lock requests.
pub const DEFAULT_MAXIMUM_LOCK_TIMEOUT: u64 = 86_400 * 100;

/// Applied when a `Timeout` header carries no usable candidate.
pub const DEFAULT_LOCK_TIMEOUT: u64 = 900;
