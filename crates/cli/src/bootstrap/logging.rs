use ptr_sync_domain::config::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// `explicit_level` is set when the level came from the command line; only
/// then does it take precedence over `RUST_LOG`.
pub fn init_logging(config: &LoggingConfig, explicit_level: bool) {
    let filter = if explicit_level {
        EnvFilter::try_new(&config.level)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))
    }
    .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}
