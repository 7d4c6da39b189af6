//! Helpers for HTML page responses.

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE, LOCATION};
use actix_web::http::StatusCode;

/// Header carrying the request trace id on error pages.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Read a response body as UTF-8 text.
pub async fn body_text(resp: ServiceResponse) -> String {
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}

/// Assert that a response is an HTML page with the expected status.
pub fn assert_html(status: StatusCode, headers: &HeaderMap, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status");
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("text/html"),
        "expected an HTML page, got content-type '{content_type}'"
    );
}

/// Assert that a response is a rendered error page carrying a trace id.
pub fn assert_error_page(status: StatusCode, headers: &HeaderMap, body: &str, expected: StatusCode) {
    assert_html(status, headers, expected);
    let trace_id = headers
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!trace_id.is_empty(), "error page should carry {TRACE_ID_HEADER}");
    assert!(
        body.contains(expected.as_str()),
        "error page body should mention {}",
        expected.as_str()
    );
}

/// The `Location` of a 303 redirect.
pub fn redirect_target(status: StatusCode, headers: &HeaderMap) -> String {
    assert_eq!(status, StatusCode::SEE_OTHER, "expected a 303 redirect");
    headers
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect should carry a Location header")
        .to_string()
}

/// A cookie set by the response, owned so it can be sent on the next request.
pub fn response_cookie<B>(resp: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}
