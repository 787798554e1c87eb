//! The route table.

use axum::http::Method;
use axum::routing::{get, post, MethodRouter};
use serde_json::{json, Value};

use crate::http::handlers;
use crate::http::server::AppState;

/// Where a documented parameter comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Query,
    Path,
    Header,
}

/// Documentation for one request parameter.
#[derive(Debug, Clone)]
pub struct ParamDoc {
    pub name: &'static str,
    pub location: ParamLocation,
    pub description: &'static str,
    /// JSON schema type, e.g. "string" or "integer".
    pub schema_type: &'static str,
}

/// Documentation for a JSON request body.
#[derive(Debug, Clone)]
pub struct BodyDoc {
    pub schema_name: &'static str,
    pub schema: fn() -> Value,
}

/// Registration metadata for a route.
#[derive(Debug, Clone)]
pub struct RouteDoc {
    pub method: Method,
    pub path: &'static str,
    pub operation_id: &'static str,
    pub summary: &'static str,
    pub description: Option<&'static str>,
    pub tag: Option<&'static str>,
    pub params: Vec<ParamDoc>,
    pub body: Option<BodyDoc>,
    /// Whether the route appears in the capability listing.
    pub listed: bool,
}

impl RouteDoc {
    fn new(method: Method, path: &'static str, operation_id: &'static str, summary: &'static str) -> Self {
        Self {
            method,
            path,
            operation_id,
            summary,
            description: None,
            tag: None,
            params: Vec::new(),
            body: None,
            listed: true,
        }
    }

    fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    fn param(mut self, name: &'static str, location: ParamLocation, schema_type: &'static str, description: &'static str) -> Self {
        self.params.push(ParamDoc {
            name,
            location,
            description,
            schema_type,
        });
        self
    }

    fn body(mut self, schema_name: &'static str, schema: fn() -> Value) -> Self {
        self.body = Some(BodyDoc { schema_name, schema });
        self
    }

    fn unlisted(mut self) -> Self {
        self.listed = false;
        self
    }
}

/// A route: its handler plus its documentation.
pub struct Route {
    pub doc: RouteDoc,
    pub handler: MethodRouter<AppState>,
}

impl Route {
    fn new(doc: RouteDoc, handler: MethodRouter<AppState>) -> Self {
        Self { doc, handler }
    }
}

const BRONZE: &str = "Bronze Tier";

// The document route is unlisted; this description is the only way to find it.
const DISCOVER_CLUE: &str = "Non-spoiler clue:\n\
- Many APIs expose resources as plural nouns (e.g., /users, /posts).\n\
- The resource you need to find is a 'document'.\n\
- The document also needs an ID - the answer to life the universe and everything.";

const ECHO_CLUE: &str = "Non-spoiler clue:\n\
- This route expects a JSON formatted body.\n\
- The JSON has to be in the EchoIn-Schema format (also documented below).";

const CLIENT_CLUE: &str = "Non-spoiler clue:\n\
- It's good manners to always specify your client name (and email) in an User-Agent header, when you send an API request.\n\
- No need for an email here.\n\
- But - your client ID should be in the following format: LinguAPI-Client/{name}";

fn echo_schema() -> Value {
    json!({
        "type": "object",
        "required": ["phrase"],
        "properties": {
            "phrase": { "type": "string", "description": "Short text to process." }
        }
    })
}

fn final_schema() -> Value {
    json!({
        "type": "object",
        "required": ["flags"],
        "properties": {
            "flags": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Four Bronze flags in order."
            }
        }
    })
}

/// Every route the service serves, in documentation order.
pub fn routes() -> Vec<Route> {
    vec![
        Route::new(
            RouteDoc::new(Method::GET, "/intro", "intro", "Welcome and navigation"),
            get(handlers::intro),
        ),
        Route::new(
            RouteDoc::new(Method::GET, "/bronze/tasks", "bronze_tasks", "Bronze: tasks overview").tag(BRONZE),
            get(handlers::tasks),
        ),
        Route::new(
            RouteDoc::new(Method::GET, "/bronze/hello", "bronze_hello", "Introduce yourself")
                .tag(BRONZE)
                .param("name", ParamLocation::Query, "string", "Your identifier for this tier."),
            get(handlers::hello),
        ),
        Route::new(
            RouteDoc::new(Method::GET, "/bronze/discover", "bronze_discover", "Get a clue for a REST-style path")
                .tag(BRONZE)
                .describe(DISCOVER_CLUE),
            get(handlers::discover),
        ),
        Route::new(
            RouteDoc::new(Method::GET, "/bronze/documents/{doc_id}", "bronze_document", "Fetch a document")
                .tag(BRONZE)
                .param("doc_id", ParamLocation::Path, "integer", "Document id")
                .unlisted(),
            get(handlers::document),
        ),
        Route::new(
            RouteDoc::new(Method::POST, "/bronze/echo", "bronze_echo", "Send a short phrase (between 10 and 60 characters)")
                .tag(BRONZE)
                .describe(ECHO_CLUE)
                .body("EchoIn", echo_schema),
            post(handlers::echo),
        ),
        Route::new(
            RouteDoc::new(Method::GET, "/bronze/client", "bronze_client", "Identify your client")
                .tag(BRONZE)
                .describe(CLIENT_CLUE)
                .param("User-Agent", ParamLocation::Header, "string", "Identify the requesting software."),
            get(handlers::client),
        ),
        Route::new(
            RouteDoc::new(Method::POST, "/bronze/final", "bronze_final", "Submit flags to receive the Bronze trophy")
                .tag(BRONZE)
                .body("FinalIn", final_schema),
            post(handlers::final_flag),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_and_operation_ids_unique() {
        let routes = routes();
        let paths: HashSet<_> = routes.iter().map(|r| r.doc.path).collect();
        let ids: HashSet<_> = routes.iter().map(|r| r.doc.operation_id).collect();
        assert_eq!(paths.len(), routes.len());
        assert_eq!(ids.len(), routes.len());
    }

    fn description_of(path: &str) -> &'static str {
        routes()
            .into_iter()
            .find(|r| r.doc.path == path)
            .and_then(|r| r.doc.description)
            .unwrap()
    }

    #[test]
    fn test_discover_clue_names_resource_and_id() {
        let clue = description_of("/bronze/discover");
        assert!(clue.contains("'document'"));
        assert!(clue.contains("the answer to life the universe and everything"));
        assert!(!clue.contains("documents/42"));
        assert!(!clue.contains("42"));
    }

    #[test]
    fn test_echo_and_client_clues() {
        assert!(description_of("/bronze/echo").contains("EchoIn-Schema format (also documented below)"));
        let client = description_of("/bronze/client");
        assert!(client.contains("No need for an email here."));
        assert!(client.contains("LinguAPI-Client/{name}"));
    }

    #[test]
    fn test_only_document_lookup_is_unlisted() {
        let unlisted: Vec<_> = routes()
            .into_iter()
            .filter(|r| !r.doc.listed)
            .map(|r| r.doc.path)
            .collect();
        assert_eq!(unlisted, vec!["/bronze/documents/{doc_id}"]);
    }
}
