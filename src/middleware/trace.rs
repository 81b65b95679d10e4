//! Per-request tracing.
//!
//! Every request runs inside an `http.request` span carrying method, path
//! and peer address. When the response is ready its status and latency are
//! logged on that span: `warn` for 5xx, `info` otherwise.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;

use tracing::{Instrument, info, info_span, warn};

use crate::response::Response;

pub(crate) async fn trace<F>(method: &http::Method, path: &str, peer: SocketAddr, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("http.request", %method, path, %peer);
    async move {
        let started = Instant::now();
        let response = fut.await;
        let status = response.status_code().as_u16();
        let latency_ms = started.elapsed().as_millis() as u64;
        if response.status_code().is_server_error() {
            warn!(status, latency_ms, "request failed");
        } else {
            info!(status, latency_ms, "request completed");
        }
        response
    }
    .instrument(span)
    .await
}
