//! OpenAPI document types and generation.
//!
//! Covers the subset of OpenAPI 3.1 this service needs:
//! <https://spec.openapis.org/oas/v3.1.0>

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

use crate::routing::{ParamLocation, RouteDoc};

/// OpenAPI document root object.
#[derive(Debug, Clone, Serialize)]
pub struct OpenApi {
    /// OpenAPI version ("3.1.0").
    pub openapi: &'static str,
    /// API metadata.
    pub info: Info,
    /// API paths and operations.
    pub paths: IndexMap<String, PathItem>,
    /// Reusable components (request body schemas).
    #[serde(skip_serializing_if = "Components::is_empty")]
    pub components: Components,
}

/// API metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            title: "LINGUAPI Challenge",
            description: "Stateless CTF for API basics.",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Operations for a single path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
}

/// An API operation (endpoint).
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: &'static str,
    pub summary: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    pub responses: IndexMap<&'static str, ResponseDoc>,
}

/// A documented parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    #[serde(rename = "in")]
    pub location: &'static str,
    pub required: bool,
    pub description: &'static str,
    pub schema: Value,
}

/// A documented response.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseDoc {
    pub description: &'static str,
}

/// Named schemas referenced from operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Components {
    pub schemas: IndexMap<&'static str, Value>,
}

impl Components {
    fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl ParamLocation {
    fn as_openapi(&self) -> &'static str {
        match self {
            ParamLocation::Query => "query",
            ParamLocation::Path => "path",
            ParamLocation::Header => "header",
        }
    }
}

impl OpenApi {
    /// Build the document from route metadata, skipping unlisted routes.
    pub fn from_routes<'a>(info: Info, routes: impl IntoIterator<Item = &'a RouteDoc>) -> Self {
        let mut paths: IndexMap<String, PathItem> = IndexMap::new();
        let mut components = Components::default();

        for route in routes.into_iter().filter(|r| r.listed) {
            let request_body = route.body.as_ref().map(|body| {
                components.schemas.insert(body.schema_name, (body.schema)());
                json!({
                    "required": true,
                    "content": {
                        "application/json": {
                            "schema": { "$ref": format!("#/components/schemas/{}", body.schema_name) }
                        }
                    }
                })
            });

            let mut responses = IndexMap::new();
            responses.insert("200", ResponseDoc { description: "Successful Response" });
            if !route.params.is_empty() || route.body.is_some() {
                responses.insert("400", ResponseDoc { description: "Rejected input" });
            }

            let operation = Operation {
                operation_id: route.operation_id,
                summary: route.summary,
                description: route.description,
                tags: route.tag.into_iter().collect(),
                parameters: route
                    .params
                    .iter()
                    .map(|p| Parameter {
                        name: p.name,
                        location: p.location.as_openapi(),
                        required: true,
                        description: p.description,
                        schema: json!({ "type": p.schema_type }),
                    })
                    .collect(),
                request_body,
                responses,
            };

            let item = paths.entry(route.path.to_string()).or_default();
            if route.method == axum::http::Method::POST {
                item.post = Some(operation);
            } else {
                item.get = Some(operation);
            }
        }

        Self {
            openapi: "3.1.0",
            info,
            paths,
            components,
        }
    }
}
