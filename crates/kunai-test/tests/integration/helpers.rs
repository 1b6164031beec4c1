#![allow(dead_code, clippy::expect_used)]
//! Request and response helpers for integration tests.

use salvo::Service;
use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::test::{RequestBuilder, ResponseExt};

pub use kunai_test::*;

/// HTTP request under construction.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// ## Panics
    /// Panics if `method` is not a valid HTTP method token.
    #[must_use]
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: Method::from_bytes(method.as_bytes()).expect("valid method token"),
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets an XML request body.
    #[must_use]
    pub fn xml_body(mut self, xml: &str) -> Self {
        self.body = Some(xml.as_bytes().to_vec());
        self.header("Content-Type", "application/xml; charset=utf-8")
    }

    /// Names the caller through the proxy header.
    #[must_use]
    pub fn as_user(self, username: &str) -> Self {
        self.header(PROXY_USER_HEADER, username)
    }

    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);
        let mut client = RequestBuilder::new(&url, self.method);

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body) = self.body {
            client = client.body(ReqBody::Once(body.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.take_string().await.unwrap_or_default();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A received response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl TestResponse {
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {} with body {:?}",
            self.status, self.body
        );
        self
    }

    /// First value of `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn assert_header(self, name: &str, expected: &str) -> Self {
        assert_eq!(self.header(name), Some(expected), "header {name}");
        self
    }

    pub fn assert_body_contains(self, needle: &str) -> Self {
        assert!(
            self.body.contains(needle),
            "Expected body to contain {needle:?}, got {:?}",
            self.body
        );
        self
    }
}
