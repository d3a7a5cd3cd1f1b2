use crate::config::{Config, LoggerConfig};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level filter built from config alone. `RUST_LOG` is not consulted.
pub fn build_filter(config: &LoggerConfig) -> EnvFilter {
    EnvFilter::new(config.level.as_directive())
}

/// JSON lines subscriber writing one record per event to `writer`.
pub fn build_subscriber<W>(config: &Config, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(build_filter(&config.logger))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json()
                .flatten_event(true),
        )
}

pub fn init_logger(config: &Config) {
    build_subscriber(config, std::io::stdout).init();
}
