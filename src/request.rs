//! Incoming HTTP request type.

use bytes::Bytes;
use http::HeaderMap;
use http::header::CONTENT_TYPE;

use crate::method::Method;
use crate::response::ContentType;

/// An incoming HTTP request with its body fully buffered.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        headers: HeaderMap,
        body: Bytes,
    ) -> Self {
        Self { method, path, headers, body }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Header lookup. Names are case-insensitive; a value that is not
    /// visible ASCII reads as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// True when the `content-type` media type equals `content_type`,
    /// ignoring case and any parameters.
    pub fn has_content_type(&self, content_type: ContentType) -> bool {
        self.header(CONTENT_TYPE.as_str())
            .and_then(|v| v.split(';').next())
            .is_some_and(|v| v.trim().eq_ignore_ascii_case(content_type.essence()))
    }
}
