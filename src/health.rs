//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can it take submissions? |
//!
//! The service has no dependencies to wait on, so both always succeed.

use crate::Request;

pub async fn liveness(_req: Request) -> &'static str {
    "ok"
}

pub async fn readiness(_req: Request) -> &'static str {
    "ready"
}
