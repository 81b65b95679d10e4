//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. A path registered under
//! some other method yields [`Route::MethodNotAllowed`] with the methods that
//! would have matched, so the server can answer `405` with an `allow` header.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;

/// Outcome of a routing lookup.
pub(crate) enum Route {
    Found(BoxedHandler),
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Registration methods return `self` so they chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or is already registered for
    /// `method`. Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    /// `GET` route. Also answers `HEAD` unless a `HEAD` handler is registered
    /// for the same path.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub(crate) fn lookup(&self, method: Method, path: &str) -> Route {
        if let Some(handler) = self.find(method, path) {
            return Route::Found(handler);
        }
        if method == Method::Head {
            if let Some(handler) = self.find(Method::Get, path) {
                return Route::Found(handler);
            }
        }

        let mut allowed: Vec<Method> = self
            .routes
            .iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();
        if allowed.is_empty() {
            return Route::NotFound;
        }
        if allowed.contains(&Method::Get) && !allowed.contains(&Method::Head) {
            allowed.push(Method::Head);
        }
        allowed.sort_by_key(|m| m.as_str());
        Route::MethodNotAllowed(allowed)
    }

    fn find(&self, method: Method, path: &str) -> Option<BoxedHandler> {
        let matched = self.routes.get(&method)?.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
