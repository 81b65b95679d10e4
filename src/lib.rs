//! # shipform
//!
//! A shipping-address form served over HTTP.
//!
//! `GET /` renders the form. `POST /` validates the submission and renders
//! the form again, either with a success banner or with inline field errors
//! and the submitted values filled back in. `POST /api/address` runs the
//! same submission and answers with JSON:
//!
//! ```text
//! { "success": false,
//!   "message": "Please fix the errors in form",
//!   "errors":  { "zipCode": "ZIP code must be at least 5 characters" },
//!   "inputs":  { "streetAddress": "123 Main St", "zipCode": "100", ... } }
//! ```
//!
//! Valid addresses go to an [`AddressStore`]. The default [`LogStore`] only
//! logs them.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use shipform::{Server, SubmitAddress, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), shipform::Error> {
//!     let router = app(SubmitAddress::new(Duration::from_secs(1)));
//!     Server::bind("0.0.0.0:3000".parse().unwrap())
//!         .await?
//!         .serve(router)
//!         .await
//! }
//! ```
//!
//! The HTTP layer underneath (router, handlers, request and response types,
//! server) is a thin wrapper over hyper and lives in this crate.

mod action;
mod address;
mod error;
mod handler;
mod method;
mod page;
mod request;
mod response;
mod router;
mod routes;
mod server;
mod status;
mod validation;

pub mod config;
pub mod health;
pub(crate) mod middleware;

pub use action::{
    ActionResponse, AddressStore, DEFAULT_SUBMIT_DELAY, FIX_ERRORS_MESSAGE, LogStore, SAVED_MESSAGE,
    StoreError, SubmitAddress, UNEXPECTED_MESSAGE,
};
pub use address::{Field, FormData, FormError, ShippingAddress};
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response};
pub use router::Router;
pub use routes::app;
pub use server::Server;
pub use status::Status;
pub use validation::{FieldErrors, ZIP_CODE_MIN_LEN, validate};
