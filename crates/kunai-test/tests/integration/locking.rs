//! Lock checks on write methods.

use chrono::{Duration, Utc};
use salvo::http::StatusCode;

use kunai_core::config::AuthMethod;
use kunai_rfc::rfc::dav::core::Depth;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn write_below_a_locked_collection_is_blocked() {
    let service = service();
    let res = TestRequest::new("PUT", "/dav/alice/shared/event.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_header("Content-Type", "text/xml; charset=\"utf-8\"")
        .assert_body_contains("<D:href>/dav/alice/shared/</D:href>")
        .assert_body_contains("HTTP/1.1 423 Locked")
        .assert_body_contains("<D:href>/dav/alice/shared/event.ics</D:href>")
        .assert_body_contains("HTTP/1.1 424 Failed Dependency");
    assert!(res.header("ETag").is_some_and(|etag| etag.starts_with('"')));
}

#[test_log::test(tokio::test)]
async fn write_on_the_locked_collection_has_no_dependency() {
    let service = service();
    let res = TestRequest::new("PROPPATCH", "/dav/alice/shared/")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("HTTP/1.1 423 Locked");
    assert!(!res.body.contains("424"));
}

#[test_log::test(tokio::test)]
async fn if_header_with_the_token_unlocks() {
    let service = service();
    TestRequest::new("PUT", "/dav/alice/shared/event.ics")
        .as_user("alice")
        .header("If", &format!("(<opaquelocktoken:{SHARED_LOCK_TOKEN}>)"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_log::test(tokio::test)]
async fn lock_token_header_unlocks() {
    let service = service();
    TestRequest::new("UNLOCK", "/dav/alice/shared/")
        .as_user("alice")
        .header("Lock-Token", &format!("<opaquelocktoken:{SHARED_LOCK_TOKEN}>"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_log::test(tokio::test)]
async fn wrong_token_is_still_blocked() {
    let service = service();
    TestRequest::new("DELETE", "/dav/alice/shared/event.ics")
        .as_user("alice")
        .header("If", "(<opaquelocktoken:someone-else>)")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS);
}

#[test_log::test(tokio::test)]
async fn reads_ignore_locks() {
    let service = service();
    TestRequest::new("GET", "/dav/alice/shared/event.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_log::test(tokio::test)]
async fn lock_below_collection_does_not_block_deep_delete() {
    let store = seeded_store().with_lock("member", "/alice/cal/busy.ics", Depth::Zero);
    let service = service_with(settings(AuthMethod::Proxy), store);
    TestRequest::new("DELETE", "/dav/alice/cal/")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);

    TestRequest::new("DELETE", "/dav/alice/cal/busy.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS);
}

#[test_log::test(tokio::test)]
async fn expired_lock_does_not_block() {
    let store = seeded_store().with_lock_expiring(
        "stale",
        "/alice/cal/",
        Depth::Infinity,
        Utc::now() - Duration::minutes(1),
    );
    let service = service_with(settings(AuthMethod::Proxy), store);
    TestRequest::new("PUT", "/dav/alice/cal/event.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_log::test(tokio::test)]
async fn permission_check_precedes_lock_check() {
    let service = service();
    TestRequest::new("PUT", "/dav/alice/shared/event.ics")
        .as_user("bob")
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}
