//! Writes gate responses onto salvo responses.

use salvo::Response;
use salvo::http::{HeaderName, HeaderValue, StatusCode};

use kunai_service::response::DavResponse;

/// ## Summary
/// Sets one header, replacing any earlier value.
///
/// Names or values that are not valid HTTP are logged and skipped.
pub fn set_header(res: &mut Response, name: &str, value: &str) {
    let (Ok(name), Ok(value)) = (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) else {
        tracing::warn!(name, value, "Skipping invalid response header");
        return;
    };

    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(name, value, true);
}

/// ## Summary
/// Copies status, headers and body of `response` onto `res`.
pub fn write_response(res: &mut Response, response: &DavResponse) {
    res.status_code(
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    );

    if let Some(content_type) = &response.content_type {
        set_header(res, "Content-Type", content_type);
    }
    if let Some(etag) = &response.etag {
        set_header(res, "ETag", etag);
    }
    for (name, value) in &response.headers {
        set_header(res, name, value);
    }

    res.body(response.body.clone());
}
