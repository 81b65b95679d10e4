//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it. The server turns it
//! into a hyper response at the edge; nothing else needs to know about hyper.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use http_body_util::Full;

use crate::status::Status;

// ── ContentType ───────────────────────────────────────────────────────────────

/// Content-type values the service produces or accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentType {
    FormData, // application/x-www-form-urlencoded
    Html,     // text/html; charset=utf-8
    Json,     // application/json
    Text,     // text/plain; charset=utf-8
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FormData => "application/x-www-form-urlencoded",
            Self::Html     => "text/html; charset=utf-8",
            Self::Json     => "application/json",
            Self::Text     => "text/plain; charset=utf-8",
        }
    }

    /// The bare media type, without parameters such as `charset`.
    pub(crate) fn essence(self) -> &'static str {
        let s = self.as_str();
        s.split(';').next().unwrap_or(s)
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK)
///
/// ```rust
/// use shipform::{Response, Status};
///
/// Response::html("<h1>hi</h1>");
/// Response::text("ok");
/// Response::status(Status::NotFound);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use shipform::{Response, Status};
///
/// Response::builder()
///     .status(Status::MethodNotAllowed)
///     .header(http::header::ALLOW, http::HeaderValue::from_static("GET, POST"))
///     .no_body();
/// ```
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// `200 OK` with `application/json`.
    pub fn json(body: Vec<u8>) -> Self {
        Self::builder().json(body)
    }

    /// `200 OK` with `text/html; charset=utf-8`.
    pub fn html(body: impl Into<String>) -> Self {
        Self::builder().html(body)
    }

    /// `200 OK` with `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self::builder().status(code).no_body()
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: HeaderMap::new(), status: StatusCode::OK }
    }

    pub fn status_code(&self) -> StatusCode { self.status }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body));
        *res.status_mut() = self.status;
        *res.headers_mut() = self.headers;
        res
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method.
pub struct ResponseBuilder {
    headers: HeaderMap,
    status: StatusCode,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code.into();
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: Vec<u8>) -> Response {
        self.bytes(ContentType::Json, body)
    }

    /// Terminate with an HTML body (`text/html; charset=utf-8`).
    pub fn html(self, body: impl Into<String>) -> Response {
        self.bytes(ContentType::Html, body.into().into_bytes())
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.bytes(ContentType::Text, body.into().into_bytes())
    }

    /// Terminate with a typed body.
    pub fn bytes(mut self, content_type: ContentType, body: Vec<u8>) -> Response {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()));
        Response { status: self.status, headers: self.headers, body: Bytes::from(body) }
    }

    /// Terminate with no body.
    pub fn no_body(self) -> Response {
        Response { status: self.status, headers: self.headers, body: Bytes::new() }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

/// Return a [`Status`] directly from a handler: `return Status::NotFound`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_sets_content_type_and_ok() {
        let res = Response::html("<p>hi</p>");
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
        assert_eq!(res.body(), b"<p>hi</p>");
    }

    #[test]
    fn builder_keeps_status_and_extra_headers() {
        let res = Response::builder()
            .status(Status::MethodNotAllowed)
            .header(http::header::ALLOW, HeaderValue::from_static("GET"))
            .no_body();

        let inner = res.into_inner();
        assert_eq!(inner.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(inner.headers()[http::header::ALLOW], "GET");
        assert!(inner.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn essence_strips_parameters() {
        assert_eq!(ContentType::Html.essence(), "text/html");
        assert_eq!(ContentType::FormData.essence(), "application/x-www-form-urlencoded");
    }
}
