//! Route handlers.
//!
//! Each handler pulls one field out of the request, hands it to the
//! matching bronze check and records the outcome. No handler keeps state
//! between requests.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::Json;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::bronze::gate::FinalRequest;
use crate::bronze::phrase::EchoRequest;
use crate::bronze::tasks::{overview, TaskInfo};
use crate::bronze::{
    CheckError, ClientReply, DiscoverHint, DocumentReply, EchoReply, HelloReply, TrophyReply,
};
use crate::docs::OpenApi;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Query accepted by the hello step.
#[derive(Debug, Deserialize)]
pub struct HelloQuery {
    pub name: String,
}

/// Log and count a check outcome, then hand it to the transport.
fn settle<T>(check: &'static str, outcome: Result<T, CheckError>) -> Result<Json<T>, ApiError> {
    match outcome {
        Ok(reply) => {
            tracing::debug!(check, "Check passed");
            metrics::record_check(check, "passed");
            Ok(Json(reply))
        }
        Err(err) => {
            tracing::info!(check, kind = err.kind(), "Check rejected");
            metrics::record_check(check, err.kind());
            Err(err.into())
        }
    }
}

pub async fn intro() -> Json<Value> {
    Json(json!({
        "welcome": "👋 Welcome to the LINGUAPI Challenge!",
        "start": "Begin at /bronze/tasks",
        "hint": "Fetch /openapi.json to explore available endpoints."
    }))
}

pub async fn tasks() -> Json<IndexMap<&'static str, TaskInfo>> {
    Json(overview())
}

pub async fn hello(
    State(state): State<AppState>,
    query: Result<Query<HelloQuery>, QueryRejection>,
) -> Result<Json<HelloReply>, ApiError> {
    let Query(query) = query?;
    settle("hello", state.bronze.hello(&query.name))
}

pub async fn discover(State(state): State<AppState>) -> Json<DiscoverHint> {
    Json(state.bronze.discover())
}

pub async fn document(
    State(state): State<AppState>,
    doc_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DocumentReply>, ApiError> {
    // A malformed id answers exactly like a wrong one.
    let outcome = match doc_id {
        Ok(Path(doc_id)) => state.bronze.document(doc_id),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Malformed document id");
            Err(CheckError::NotFound)
        }
    };
    settle("document", outcome)
}

pub async fn echo(
    State(state): State<AppState>,
    body: Result<Json<EchoRequest>, JsonRejection>,
) -> Result<Json<EchoReply>, ApiError> {
    let Json(body) = body?;
    settle("echo", state.bronze.echo(&body.phrase))
}

pub async fn client(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ClientReply>, ApiError> {
    let user_agent = headers
        .get(USER_AGENT)
        .ok_or(ApiError::MissingHeader("User-Agent"))?;
    // Header values may carry obs-text; decode leniently instead of refusing.
    let user_agent = String::from_utf8_lossy(user_agent.as_bytes());
    settle("client", state.bronze.client(&user_agent))
}

pub async fn final_flag(
    State(state): State<AppState>,
    body: Result<Json<FinalRequest>, JsonRejection>,
) -> Result<Json<TrophyReply>, ApiError> {
    let Json(body) = body?;
    settle("final", state.bronze.verify(&body.flags))
}

pub async fn openapi(State(state): State<AppState>) -> Json<OpenApi> {
    Json(state.openapi.as_ref().clone())
}

pub async fn not_found() -> ApiError {
    ApiError::Rejected {
        status: axum::http::StatusCode::NOT_FOUND,
        detail: "Not Found".to_string(),
    }
}
