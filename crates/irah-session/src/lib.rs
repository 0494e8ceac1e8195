//! irah-session
//!
//! The hosting-session layer: owns the ward roster for the lifetime of
//! an interactive session and exposes the command functions the
//! presentation layer (form, CLI or API) invokes. The roster lives
//! behind an async mutex so a multi-user host cannot interleave
//! last-write-wins mutations.

pub mod audit;
pub mod commands;
pub mod error;
pub mod state;

/// Initialise tracing for a hosting process. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
