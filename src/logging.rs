//! Tracing initialization for the CLI.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive list,
/// e.g. `FIGCOMP_LOG=figcomp_lib::convert=trace`.
pub const LOG_ENV: &str = "FIGCOMP_LOG";

static INIT: Once = Once::new();

/// Default filter when `FIGCOMP_LOG` is unset or invalid.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "figcomp=debug,figcomp_lib=debug"
    } else {
        "figcomp=warn,figcomp_lib=warn"
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose),
            )
            .with(filter)
            .try_init();
    });
}
