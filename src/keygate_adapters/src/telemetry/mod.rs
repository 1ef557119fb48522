//! Tracing setup shared by the service binaries.

use std::time::Duration;

use color_eyre::eyre::Result;
use http::{Request, Response};
use tracing::{Level, Span};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

/// Root span for one HTTP request, tagged with a fresh request id so log
/// lines from concurrent requests stay attributable.
pub fn make_span_with_request_id<B>(request: &Request<B>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        Level::INFO,
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
    )
}

pub fn on_request<B>(_request: &Request<B>, _span: &Span) {
    tracing::event!(Level::INFO, "started processing request");
}

pub fn on_response<B>(response: &Response<B>, latency: Duration, _span: &Span) {
    tracing::event!(
        Level::INFO,
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "finished processing request",
    );
}
