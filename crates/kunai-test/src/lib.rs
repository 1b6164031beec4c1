//! Kunai DAV gate - integration test support.
//!
//! Builds settings and a seeded in-memory store so that integration tests
//! can drive the full salvo router without a database.

use std::sync::Arc;

use salvo::Service;

use kunai_core::config::{
    AuthConfig, AuthMethod, DatabaseConfig, DavConfig, LoggingConfig, ProxyAuthConfig,
    ServerConfig, Settings, SingleUserAuthConfig,
};
use kunai_db::store::DavStore;
use kunai_rfc::rfc::dav::core::Depth;
use kunai_service::fixture::MemoryStore;

/// Header the test proxy uses to name the caller.
pub const PROXY_USER_HEADER: &str = "X-Remote-User";

pub const ALICE: i32 = 1;
pub const BOB: i32 = 2;
pub const CAROL: i32 = 3;
pub const ROOT: i32 = 4;

/// Token of the infinite lock seeded on `/alice/shared/`.
pub const SHARED_LOCK_TOKEN: &str = "a1b2c3d4-0000-4000-8000-000000000001";

#[must_use]
pub fn settings(method: AuthMethod) -> Settings {
    Settings {
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
        },
        auth: AuthConfig {
            method,
            proxy: Some(ProxyAuthConfig {
                header: PROXY_USER_HEADER.to_string(),
            }),
            single_user: Some(SingleUserAuthConfig {
                username: "alice".to_string(),
            }),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
            serve_origin: None,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        dav: DavConfig::default(),
    }
}

/// ## Summary
/// A store with four users, a few collections, relationships and one lock.
///
/// - alice owns `/alice/`, `/alice/cal/` and `/alice/shared/`
/// - bob may read alice's resources
/// - carol has no relationship with anyone
/// - root is an administrator
/// - `/alice/shared/` carries an infinite lock
#[must_use]
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_user(ALICE, "alice", Some("alice@example.com"), false)
        .with_user(BOB, "bob", Some("bob@example.com"), false)
        .with_user(CAROL, "carol", None, false)
        .with_user(ROOT, "root", None, true)
        .with_collection("/alice/")
        .with_collection("/alice/cal/")
        .with_collection("/alice/shared/")
        .with_collection("/bob/")
        .with_grant(BOB, ALICE, "R")
        .with_lock(SHARED_LOCK_TOKEN, "/alice/shared/", Depth::Infinity)
}

/// The full application over `store`.
#[must_use]
pub fn service_with(settings: Settings, store: MemoryStore) -> Service {
    let store: Arc<dyn DavStore> = Arc::new(store);
    Service::new(kunai_app::app::router(settings, store))
}

/// The full application in proxy mode over the seeded store.
#[must_use]
pub fn service() -> Service {
    service_with(settings(AuthMethod::Proxy), seeded_store())
}
