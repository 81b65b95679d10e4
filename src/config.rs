//! Command-line and environment configuration.

use std::fmt::{self, Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

/// Every flag can also be set through the environment variable named after
/// it (`--submit-delay` → `SUBMIT_DELAY`).
#[derive(clap::Parser, Debug)]
#[clap(version, about)]
pub struct Arguments {
    /// Address the HTTP server listens on.
    #[clap(long, env, default_value = "0.0.0.0:3000")]
    pub bind_address: SocketAddr,

    /// Simulated latency applied to every submission before it is processed.
    #[clap(long, env, default_value = "1s", value_parser = humantime::parse_duration)]
    pub submit_delay: Duration,

    /// Tracing filter, in `EnvFilter` syntax.
    #[clap(long, env, default_value = "info")]
    pub log_filter: String,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { bind_address, submit_delay, log_filter } = self;

        writeln!(f, "bind_address: {bind_address}")?;
        writeln!(f, "submit_delay: {}", humantime::format_duration(*submit_delay))?;
        writeln!(f, "log_filter: {log_filter}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults() {
        let args = Arguments::try_parse_from(["shipform"]).unwrap();
        assert_eq!(args.bind_address, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(args.submit_delay, Duration::from_secs(1));
        assert_eq!(args.log_filter, "info");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Arguments::try_parse_from([
            "shipform",
            "--bind-address",
            "127.0.0.1:8080",
            "--submit-delay",
            "250ms",
        ])
        .unwrap();
        assert_eq!(args.bind_address.port(), 8080);
        assert_eq!(args.submit_delay, Duration::from_millis(250));
        assert!(args.to_string().contains("submit_delay: 250ms"));
    }

    #[test]
    fn rejects_bad_duration() {
        assert!(Arguments::try_parse_from(["shipform", "--submit-delay", "soon"]).is_err());
    }
}
