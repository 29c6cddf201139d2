use keyscope_domain::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if config.logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
}
