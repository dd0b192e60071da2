//! Logging setup
//!
//! Log output goes to stderr so it never mixes with command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber for the CLI
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "expense_tracker=debug"
    } else {
        "expense_tracker=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // try_init: a second call (e.g. from tests) must not panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
