//! OPTIONS answers.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn collection_allows_collection_methods() {
    let service = service();
    let res = TestRequest::new("OPTIONS", "/dav/alice/cal/")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let allow = res.header("Allow").unwrap_or_default();
    assert!(allow.contains("MKCALENDAR"));
    assert!(allow.contains("PROPFIND"));
    assert!(res.header("DAV").is_some_and(|dav| dav.contains("calendar-access")));
}

#[test_log::test(tokio::test)]
async fn item_allows_item_methods() {
    let service = service();
    let res = TestRequest::new("OPTIONS", "/dav/alice/cal/event.ics")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let allow = res.header("Allow").unwrap_or_default();
    assert!(allow.contains("PUT"));
    assert!(!allow.contains("MKCALENDAR"));
}

#[test_log::test(tokio::test)]
async fn options_needs_no_permission() {
    let service = service();
    TestRequest::new("OPTIONS", "/dav/alice/cal/")
        .as_user("carol")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn options_still_validates_the_path() {
    let service = service();
    TestRequest::new("OPTIONS", "/dav/alice/%5Bcal%5D/")
        .as_user("alice")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
