use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "dpm_poller=info";

/// Fixed filter. `RUST_LOG` is not consulted, so the per-iteration body lines
/// can never be filtered away from outside the program.
pub fn build_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Compact single-line output; the fmt layer prefixes every event with a timestamp.
pub fn init_logger() {
    tracing_subscriber::registry()
        .with(build_filter())
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
