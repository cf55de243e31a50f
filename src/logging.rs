//! Tracing setup shared by the binaries

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(filter(&config.level));

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Subscriber for events emitted before the configuration is known
///
/// Use with [`tracing::subscriber::with_default`] around config loading.
pub fn bootstrap() -> impl Subscriber + Send + Sync + 'static {
    bootstrap_with_writer(std::io::stderr)
}

pub(crate) fn bootstrap_with_writer<W>(make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_writer(make_writer)
        .finish()
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "recycling_dashboard={level},tower_http={level}",
            level = level
        ))
    })
}
