//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router from the route table
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Build the OpenAPI document once at startup
//! - Bind server to listener and stop on shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::bronze::{Bronze, FlagSet};
use crate::config::ChallengeConfig;
use crate::docs::openapi::{Info, OpenApi};
use crate::http::handlers;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::shutdown::wait as wait_for_shutdown;
use crate::observability::metrics;
use crate::routing;

/// Application state injected into handlers.
///
/// Read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub bronze: Arc<Bronze>,
    pub openapi: Arc<OpenApi>,
}

/// HTTP server for the challenge.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ChallengeConfig) -> Self {
        let routes = routing::routes();
        let openapi = OpenApi::from_routes(Info::default(), routes.iter().map(|r| &r.doc));

        let state = AppState {
            bronze: Arc::new(Bronze::new(FlagSet::from(&config.flags))),
            openapi: Arc::new(openapi),
        };

        let router = Self::build_router(&config, routes, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ChallengeConfig, routes: Vec<routing::Route>, state: AppState) -> Router {
        let mut router = Router::new().route("/openapi.json", get(handlers::openapi));
        for route in routes {
            router = router.route(route.doc.path, route.handler);
        }

        let request_id_header = HeaderName::from_static(X_REQUEST_ID);

        router
            .route_layer(middleware::from_fn(metrics::track_requests))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(request_id_header.clone(), UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            path = %request.uri().path(),
                            request_id = %request_id(request),
                        )
                    }))
                    .layer(PropagateRequestIdLayer::new(request_id_header))
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
                    // Innermost: Timeout requires a `Default` response body.
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                wait_for_shutdown(shutdown).await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
