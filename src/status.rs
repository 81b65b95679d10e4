//! HTTP status codes as a typed enum.
//!
//! Use [`Status`] anywhere a status code is accepted: `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! ```rust
//! use shipform::{Response, Status};
//!
//! Response::status(Status::NotFound);
//!
//! Response::builder()
//!     .status(Status::UnprocessableContent)
//!     .json(br#"{"success":false}"#.to_vec());
//! ```

/// The status codes this service answers with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                   // 200

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,           // 400
    NotFound,             // 404
    MethodNotAllowed,     // 405
    UnsupportedMediaType, // 415
    UnprocessableContent, // 422

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,  // 500
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> Self {
        match s {
            Status::Ok                   => Self::OK,
            Status::BadRequest           => Self::BAD_REQUEST,
            Status::NotFound             => Self::NOT_FOUND,
            Status::MethodNotAllowed     => Self::METHOD_NOT_ALLOWED,
            Status::UnsupportedMediaType => Self::UNSUPPORTED_MEDIA_TYPE,
            Status::UnprocessableContent => Self::UNPROCESSABLE_ENTITY,
            Status::InternalServerError  => Self::INTERNAL_SERVER_ERROR,
        }
    }
}
