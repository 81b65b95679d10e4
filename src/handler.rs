//! Handler trait and type erasure.
//!
//! The router stores handlers of different concrete types side by side, so
//! each one is wrapped in an `Arc<dyn ErasedHandler>`. Registering
//! `router.post("/", submit)` boxes `submit` once; every request then costs
//! one `Arc` clone and one virtual call that returns a pinned future.
//!
//! Closures work too, which is how route handlers get at shared state:
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use shipform::{Request, Response, Router};
//! let greeting = Arc::new(String::from("hello"));
//! let app = Router::new().get("/", move |_req: Request| {
//!     let greeting = Arc::clone(&greeting);
//!     async move { Response::text(greeting.as_str()) }
//! });
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` because it appears in the signature of the public
/// [`Handler::into_boxed_handler`].
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid route handler: any `Fn(Request) -> impl
/// Future<Output = impl IntoResponse>` that is `Send + Sync + 'static`.
///
/// Sealed. The blanket impl below is the only one.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
