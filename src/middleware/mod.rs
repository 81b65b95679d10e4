//! Middleware layer.
//!
//! Cross-cutting concerns that wrap every request on its way through the
//! server. Currently only request tracing.

pub(crate) mod trace;
