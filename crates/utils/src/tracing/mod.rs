use ::tracing::{debug, Subscriber};
use pipekit_config::{ConfigLoader, LogFormat, TraceConfig};
use pipekit_core::{Error, Result};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

pub mod capture;
pub mod taps;

// Re-export tracing macros for convenience
pub use ::tracing::{error, info, trace, warn, Level};
pub use capture::{TapCaptureLayer, TapEvent};
pub use taps::{trace_err, trace_none, trace_ok, trace_some, trace_value};

/// Install the global tracing subscriber described by `config`
///
/// Events are filtered by `config.filter` and written to stderr in the
/// requested format. Fails if the filter does not parse or a global
/// subscriber is already installed.
pub fn init(config: &TraceConfig) -> Result<()> {
    config.validate()?;
    let filter = build_filter(config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config))
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    debug!(filter = %config.filter, format = %config.format, "tracing initialized");
    Ok(())
}

/// Resolve configuration from the environment and install the subscriber
pub fn init_from_env() -> Result<()> {
    let config = ConfigLoader::new().load()?;
    init(&config)
}

/// Parse the filter directive into an `EnvFilter`
pub fn build_filter(config: &TraceConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.filter).map_err(|e| {
        Error::logging(format!("invalid filter directive '{}': {e}", config.filter))
    })
}

/// Build the stderr `fmt` layer shaped by `format`, `ansi` and `with_target`
pub fn fmt_layer<S>(config: &TraceConfig) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .with_thread_ids(false)
        .with_level(true);

    match config.format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Full => layer.boxed(),
    }
}
