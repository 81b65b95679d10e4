//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C the server:
//! 1. stops accepting new connections,
//! 2. lets every in-flight connection task run to completion,
//! 3. returns from [`Server::serve`], so `main` can exit cleanly.
//!
//! A submission sleeps for the configured delay before it is processed, so
//! give the process at least that long to drain.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http::HeaderValue;
use http::header::ALLOW;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::method::Method;
use crate::middleware::trace::trace;
use crate::request::Request;
use crate::response::Response;
use crate::router::{Route, Router};
use crate::status::Status;

/// The HTTP server.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listening socket. Port `0` picks a free port; read it back
    /// with [`local_addr`](Server::local_addr).
    pub async fn bind(addr: SocketAddr) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves `router` until SIGTERM or Ctrl-C, then drains in-flight
    /// connections.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        self.serve_with_shutdown(router, shutdown_signal()).await
    }

    /// Serves `router` until `shutdown` resolves, then drains in-flight
    /// connections.
    pub async fn serve_with_shutdown(
        self,
        router: Router,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), Error> {
        let addr = self.local_addr()?;
        let router = Arc::new(router);

        info!(%addr, "shipform listening");

        let mut tasks = tokio::task::JoinSet::new();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Shutdown is checked first so a signal stops accepting even
                // when more connections are queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = self.listener.accept() => {
                    let (stream, peer) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req, peer).await }
                        });

                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            debug!(%peer, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("shipform stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and produces one response. Every failure becomes a
/// status code here, so hyper never sees an error.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<Incoming>,
    peer: SocketAddr,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();

    let response = trace(&method, &path, peer, handle(&router, parts, body)).await;
    Ok(response.into_inner())
}

async fn handle(router: &Router, parts: http::request::Parts, body: Incoming) -> Response {
    let method = match Method::try_from(&parts.method) {
        Ok(m) => m,
        Err(e) => {
            debug!("{e}");
            return Response::status(Status::MethodNotAllowed);
        }
    };
    let path = parts.uri.path().to_owned();

    let handler = match router.lookup(method, &path) {
        Route::Found(handler) => handler,
        Route::NotFound => return Response::status(Status::NotFound),
        Route::MethodNotAllowed(allowed) => return method_not_allowed(&allowed),
    };

    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!("failed to read request body: {e}");
            return Response::status(Status::BadRequest);
        }
    };

    handler.call(Request::new(method, path, parts.headers, body)).await
}

fn method_not_allowed(allowed: &[Method]) -> Response {
    let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
    let builder = Response::builder().status(Status::MethodNotAllowed);
    match HeaderValue::try_from(allow) {
        Ok(value) => builder.header(ALLOW, value).no_body(),
        Err(_) => builder.no_body(),
    }
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first SIGTERM or SIGINT (Ctrl-C). On Windows only
/// Ctrl-C is available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c  => {}
        () = sigterm => {}
    }
}
