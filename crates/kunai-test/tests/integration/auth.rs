//! Caller identification ahead of the gate.

use salvo::http::StatusCode;

use kunai_core::config::AuthMethod;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn missing_proxy_header_is_unauthorized() {
    let service = service();
    let res = TestRequest::new("PROPFIND", "/dav/alice/cal/")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert!(res.header("X-Kunai-Version").is_some());
}

#[test_log::test(tokio::test)]
async fn unknown_user_is_unauthorized() {
    let service = service();
    TestRequest::new("PROPFIND", "/dav/alice/cal/")
        .as_user("mallory")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_body_contains("Unauthorized");
}

#[test_log::test(tokio::test)]
async fn single_user_mode_ignores_proxy_header() {
    let service = service_with(settings(AuthMethod::SingleUser), seeded_store());
    TestRequest::new("PROPFIND", "/dav/alice/cal/")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_log::test(tokio::test)]
async fn failing_store_is_a_server_error() {
    let service = service_with(settings(AuthMethod::Proxy), seeded_store().failing());
    TestRequest::new("GET", "/dav/alice/cal/x.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_log::test(tokio::test)]
async fn illegal_path_is_rejected_before_caller_lookup() {
    let service = service();
    TestRequest::new("PROPFIND", "/dav/alice/cal(1)/")
        .as_user("mallory")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("The calendar path contains illegal characters.");

    TestRequest::new("PROPFIND", "/dav/alice/%5Ecal/")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    // The store is never reached.
    let service = service_with(settings(AuthMethod::Proxy), seeded_store().failing());
    TestRequest::new("GET", "/dav/alice/cal(1)/x.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
