use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when RUST_LOG is not set: crate-level detail, quiet deps.
fn default_cli_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("amduong=debug,info")
    } else {
        EnvFilter::new("amduong=info")
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_cli_filter(verbose));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
