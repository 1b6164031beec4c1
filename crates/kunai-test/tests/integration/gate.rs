//! Header normalization, path resolution and permission checks.

use salvo::http::StatusCode;

use kunai_core::config::AuthMethod;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn illegal_path_is_rejected() {
    let service = service();
    let res = TestRequest::new("GET", "/dav/alice/cal(1)/event.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("The calendar path contains illegal characters.");
    assert_eq!(res.header("Content-Type"), Some("text/plain; charset=\"utf-8\""));
    assert!(res.header("X-Kunai-Version").is_some());
}

#[test_log::test(tokio::test)]
async fn encoded_illegal_path_is_rejected() {
    let service = service();
    TestRequest::new("GET", "/dav/alice/%5Ecal/")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn malformed_depth_is_rejected() {
    let service = service();
    TestRequest::new("PROPFIND", "/dav/alice/cal/")
        .as_user("alice")
        .header("Depth", "deep")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("Invalid Depth header");
}

#[test_log::test(tokio::test)]
async fn collection_without_slash_gets_content_location() {
    let service = service();
    TestRequest::new("PROPFIND", "/dav/alice/cal")
        .as_user("alice")
        .header("Depth", "1")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED)
        .assert_header("Content-Location", "/dav/alice/cal/");
}

#[test_log::test(tokio::test)]
async fn item_path_has_no_content_location() {
    let service = service();
    let res = TestRequest::new("GET", "/dav/alice/cal/event.ics")
        .as_user("alice")
        .send(&service)
        .await;
    assert_eq!(res.header("Content-Location"), None);
}

#[test_log::test(tokio::test)]
async fn owner_passes_to_the_handler() {
    let service = service();
    TestRequest::new("PUT", "/dav/alice/cal/event.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED)
        .assert_body_contains("PUT is not implemented");
}

#[test_log::test(tokio::test)]
async fn reader_may_read_but_not_write() {
    let service = service();
    TestRequest::new("PROPFIND", "/dav/alice/cal/")
        .as_user("bob")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);

    TestRequest::new("PUT", "/dav/alice/cal/event.ics")
        .as_user("bob")
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn stranger_is_forbidden() {
    let service = service();
    TestRequest::new("GET", "/dav/alice/cal/event.ics")
        .as_user("carol")
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn administrator_may_do_anything() {
    let service = service();
    TestRequest::new("DELETE", "/dav/alice/cal/")
        .as_user("root")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_log::test(tokio::test)]
async fn root_collection_is_readable_but_not_writable() {
    let service = service();
    TestRequest::new("PROPFIND", "/dav/")
        .as_user("carol")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);

    TestRequest::new("MKCOL", "/dav/")
        .as_user("carol")
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn unknown_method_needs_a_matching_capability() {
    let service = service();
    TestRequest::new("FROBNICATE", "/dav/alice/cal/")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);

    TestRequest::new("FROBNICATE", "/dav/alice/cal/")
        .as_user("bob")
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn if_match_fails_on_a_missing_resource() {
    let service = service();
    TestRequest::new("PUT", "/dav/alice/cal/event.ics")
        .as_user("alice")
        .header("If-Match", "*")
        .send(&service)
        .await
        .assert_status(StatusCode::PRECONDITION_FAILED);
}

#[test_log::test(tokio::test)]
async fn email_segment_addresses_its_owner() {
    let mut settings = settings(AuthMethod::Proxy);
    settings.dav.allow_by_email = true;
    let service = service_with(settings, seeded_store());

    TestRequest::new("GET", "/dav/carol/alice@example.com")
        .as_user("carol")
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    TestRequest::new("GET", "/dav/carol/alice@example.com")
        .as_user("bob")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_log::test(tokio::test)]
async fn email_segment_is_a_plain_name_by_default() {
    let service = service();
    TestRequest::new("GET", "/dav/carol/alice@example.com")
        .as_user("carol")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}
