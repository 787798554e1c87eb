//! Static overview of the five bronze steps.

use indexmap::IndexMap;
use serde::Serialize;

/// One step as shown to the learner. Deliberately spoiler free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskInfo {
    pub endpoint: &'static str,
    pub method: &'static str,
    pub learn: &'static str,
    pub description: &'static str,
    pub hint: &'static str,
}

/// The task list keyed by title, in step order.
pub fn overview() -> IndexMap<&'static str, TaskInfo> {
    IndexMap::from([
        (
            "1. Say Hello",
            TaskInfo {
                endpoint: "/bronze/hello",
                method: "GET",
                learn: "Query parameters",
                description: "Introduce yourself to the API.",
                hint: "Call the route with a single query parameter.",
            },
        ),
        (
            "2. Find the REST endpoint",
            TaskInfo {
                endpoint: "/bronze/discover",
                method: "GET",
                learn: "REST resource naming + path parameters",
                description: "Infer a resource-style path and fetch a specific item.",
                hint: "Start at /bronze/discover for a clue.",
            },
        ),
        (
            "3. Body Parameters",
            TaskInfo {
                endpoint: "/bronze/echo",
                method: "POST",
                learn: "JSON request body",
                description: "Send a short phrase for the server to process.",
                hint: "POST a small JSON object.",
            },
        ),
        (
            "4. Request Headers",
            TaskInfo {
                endpoint: "/bronze/client",
                method: "GET",
                learn: "HTTP headers (User-Agent)",
                description: "Identify your client as if scraping politely.",
                hint: "Send one header that names your client.",
            },
        ),
        (
            "5. Get the Bronze Flag",
            TaskInfo {
                endpoint: "/bronze/final",
                method: "POST",
                learn: "Chaining and verification",
                description: "Combine the four flags to unlock Bronze.",
                hint: "Submit the four codes in order.",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_is_ordered_and_spoiler_free() {
        let tasks = overview();
        let titles: Vec<_> = tasks.keys().copied().collect();
        assert_eq!(titles.len(), 5);
        assert!(titles[0].starts_with("1."));
        assert!(titles[4].starts_with("5."));

        let rendered = serde_json::to_string(&tasks).unwrap();
        assert!(!rendered.contains("/bronze/documents"));
        assert!(!rendered.contains("BRZ"));
    }
}
