//! Process-wide `tracing` subscriber for the `pitchdeck` binary.
//!
//! Log lines go to stderr through a `fmt` layer. With `--otel`, spans (one
//! per generation, plus the research and copywriting steps) are also
//! bridged to OpenTelemetry and printed by the stdout exporter.
//!
//! ```no_run
//! use pitchdeck_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
//!
//! init_tracing(verbosity_filter(1, false), false).unwrap();
//! // ... run ...
//! shutdown_tracing();
//! ```

use std::error::Error;
use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Instrumentation scope name for exported spans.
const TRACER_NAME: &str = "pitchdeck";

/// Kept so [`shutdown_tracing`] can flush the exporter on exit.
static OTEL_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Default filter for the CLI's `-q` / `-v` flags. `RUST_LOG` overrides it.
pub fn verbosity_filter(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, 0) => "error",
        (_, 0) => "info",
        (_, 1) => "info,pitchdeck=debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str, enable_otel: bool) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);

    let otel_layer = enable_otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer(TRACER_NAME);
        let _ = OTEL_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;
    Ok(())
}

/// Flush and stop the OpenTelemetry exporter. No-op when it was never enabled.
pub fn shutdown_tracing() {
    let Some(provider) = OTEL_PROVIDER.get() else {
        return;
    };
    if let Err(e) = provider.shutdown() {
        eprintln!("Warning: OpenTelemetry shutdown failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_filter(0, true), "error");
        assert_eq!(verbosity_filter(0, false), "info");
        assert_eq!(verbosity_filter(1, false), "info,pitchdeck=debug");
        assert_eq!(verbosity_filter(3, false), "trace");
    }

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(verbosity_filter(1, true), "info,pitchdeck=debug");
    }

    #[test]
    fn default_filters_parse() {
        for (verbose, quiet) in [(0, true), (0, false), (1, false), (2, false)] {
            assert!(EnvFilter::try_new(verbosity_filter(verbose, quiet)).is_ok());
        }
    }

    #[test]
    fn shutdown_without_init_is_noop() {
        shutdown_tracing();
    }
}
