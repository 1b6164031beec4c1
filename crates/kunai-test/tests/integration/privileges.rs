//! `DAV:supported-privilege-set` on principal collections.

use salvo::http::StatusCode;

use super::helpers::*;

const SUPPORTED_PRIVILEGES_BODY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<D:propfind xmlns:D="DAV:">
  <D:prop><D:supported-privilege-set/></D:prop>
</D:propfind>"#;

#[test_log::test(tokio::test)]
async fn principal_lists_supported_privileges() {
    let service = service();
    let res = TestRequest::new("PROPFIND", "/dav/alice/")
        .as_user("alice")
        .header("Depth", "0")
        .xml_body(SUPPORTED_PRIVILEGES_BODY)
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_header("Content-Type", "text/xml; charset=\"utf-8\"")
        .assert_body_contains("<D:href>/dav/alice/</D:href>")
        .assert_body_contains("<D:privilege><D:all/></D:privilege>")
        .assert_body_contains("<D:privilege><D:unbind/></D:privilege>")
        .assert_body_contains("HTTP/1.1 200 OK");
    assert!(res.header("ETag").is_some());
}

#[test_log::test(tokio::test)]
async fn reader_sees_supported_privileges_stranger_does_not() {
    let service = service();
    TestRequest::new("PROPFIND", "/dav/alice/")
        .as_user("bob")
        .header("Depth", "0")
        .xml_body(SUPPORTED_PRIVILEGES_BODY)
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS);

    TestRequest::new("PROPFIND", "/dav/alice/")
        .as_user("carol")
        .header("Depth", "0")
        .xml_body(SUPPORTED_PRIVILEGES_BODY)
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn other_propfinds_stay_unimplemented() {
    let service = service();

    // Not a principal.
    TestRequest::new("PROPFIND", "/dav/alice/cal/")
        .as_user("alice")
        .header("Depth", "0")
        .xml_body(SUPPORTED_PRIVILEGES_BODY)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);

    // Default depth is infinity.
    TestRequest::new("PROPFIND", "/dav/alice/")
        .as_user("alice")
        .xml_body(SUPPORTED_PRIVILEGES_BODY)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);

    TestRequest::new("PROPFIND", "/dav/alice/")
        .as_user("alice")
        .header("Depth", "0")
        .xml_body(r#"<D:propfind xmlns:D="DAV:"><D:allprop/></D:propfind>"#)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_IMPLEMENTED);
}

#[test_log::test(tokio::test)]
async fn malformed_propfind_body_is_rejected() {
    let service = service();
    TestRequest::new("PROPFIND", "/dav/alice/")
        .as_user("alice")
        .header("Depth", "0")
        .xml_body(r#"<D:propfind xmlns:D="DAV:"><D:prop></D:propfind>"#)
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("Malformed XML request body");
}
