use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Quiet by default so a failed run
/// leaves only its error line on stderr.
pub fn default_directive(verbose: bool, monitor: bool) -> &'static str {
    if verbose {
        "ticket_stats=debug"
    } else if monitor {
        "ticket_stats=info"
    } else {
        "ticket_stats=warn"
    }
}

/// Logs go to stderr so stdout carries nothing but the report.
pub fn init_cli_logger(verbose: bool, monitor: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, monitor)));

    tracing_subscriber::registry()
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
        .init();
}
