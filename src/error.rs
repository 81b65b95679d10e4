//! Unified error type.

use std::net::SocketAddr;

/// The error type returned by the server's fallible operations.
///
/// A rejected submission is not an `Error`. Validation failures and
/// processing failures both end up as an [`ActionResponse`](crate::ActionResponse)
/// rendered into a [`Response`](crate::Response). This type only surfaces
/// infrastructure failures: binding the listener or reading its address.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
