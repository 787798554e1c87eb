//! Metrics collection and exposition.
//!
//! # Metrics
//! - `linguapi_requests_total` (counter): requests by method, route, status
//! - `linguapi_request_duration_seconds` (histogram): latency by method, route
//! - `linguapi_checks_total` (counter): check outcomes by check and result
//!
//! # Design Decisions
//! - Labels use the matched route template, never the raw path
//! - Without an installed recorder every call is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus exporter on `addr`. Needs a running Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Count one check outcome. `outcome` is `"passed"` or an error kind.
pub fn record_check(check: &'static str, outcome: &'static str) {
    metrics::counter!("linguapi_checks_total", "check" => check, "outcome" => outcome).increment(1);
}

/// Record a finished request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let route = route.to_string();
    metrics::counter!(
        "linguapi_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "linguapi_request_duration_seconds",
        "method" => method,
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());
}

/// Middleware recording count and latency for matched routes.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;
    record_request(method.as_str(), &route, response.status().as_u16(), start);
    response
}
