/*!
 * Tracing
 * Subscriber setup and timed operation spans using the tracing crate
 *
 * Features:
 * - EnvFilter driven levels (RUST_LOG)
 * - JSON-formatted logs for structured parsing (RT_TRACE_JSON)
 * - Timed spans for bulk container work (file I/O, rehash)
 */

use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

/// Operations slower than this are reported at `warn`
const SLOW_OPERATION_MS: u128 = 100;

fn json_requested() -> bool {
    std::env::var("RT_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

/// Initialize structured tracing, returning an error if a global
/// subscriber is already installed
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - RT_TRACE_JSON: Enable JSON output (default: false)
pub fn try_init_tracing() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?;
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
        info!("Structured tracing initialized");
    }
    Ok(())
}

/// Initialize structured tracing
///
/// A second call is a no-op apart from a `debug` event.
pub fn init_tracing() {
    if let Err(err) = try_init_tracing() {
        debug!(error = %err, "tracing already initialized");
    }
}

/// Timed span around one container operation
///
/// Records the elapsed time when dropped.
pub struct OperationSpan {
    span: tracing::Span,
    start: Instant,
    operation: &'static str,
}

impl OperationSpan {
    pub fn new(operation: &'static str) -> Self {
        let span = span!(
            Level::DEBUG,
            "collection_op",
            operation = operation,
            duration_us = tracing::field::Empty,
            bytes = tracing::field::Empty,
            items = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            operation,
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn record_bytes(&self, bytes: usize) {
        self.span.record("bytes", bytes);
    }

    pub fn record_items(&self, items: usize) {
        self.span.record("items", items);
    }

    pub fn record_error(&self, error: &dyn std::fmt::Display) {
        self.span.record("error", tracing::field::display(error));
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for OperationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros());

        if duration.as_millis() > SLOW_OPERATION_MS {
            warn!(
                operation = self.operation,
                duration_ms = duration.as_millis(),
                slow = true,
                "slow collection operation"
            );
        } else {
            debug!(
                operation = self.operation,
                duration_us = duration.as_micros(),
                "collection operation completed"
            );
        }
    }
}

/// Helper to open a timed operation span
#[inline]
pub fn span_operation(name: &'static str) -> OperationSpan {
    OperationSpan::new(name)
}
