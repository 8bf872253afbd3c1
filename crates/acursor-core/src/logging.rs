#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature the standard `tracing` macros are re-exported
//! here (and at the crate root). Without it, the event macros expand to
//! nothing so call sites compile unchanged and cost nothing.
//!
//! The `tracing-json` feature adds [`init_json_subscriber`] for hosts that
//! want structured JSON logs filtered through `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

#[cfg(not(feature = "tracing"))]
mod noop {
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }
}

/// Install a global JSON subscriber honoring `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
        .is_ok()
}
