use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Console logging, filtered by `RUST_LOG` (defaults to info for this crate).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("listing_scraper=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
