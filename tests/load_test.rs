//! Concurrency tests: every request is judged on its own.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_concurrent_final_submissions() {
    let server = common::start_server().await;
    let flags = common::default_flags();

    let concurrency = 20;
    let requests_per_task = 25;
    let start = Instant::now();

    let mut handles = Vec::new();
    for task in 0..concurrency {
        let client = server.client.clone();
        let url = server.url("/bronze/final");
        let flags = flags.clone();
        handles.push(tokio::spawn(async move {
            let mut ok: usize = 0;
            for i in 0..requests_per_task {
                // Interleave bad submissions; they must not disturb good ones.
                let mut submission = flags.clone();
                let expect_ok = (task + i) % 3 != 0;
                if !expect_ok {
                    submission.reverse();
                }
                let res = client
                    .post(&url)
                    .json(&json!({ "flags": submission }))
                    .send()
                    .await
                    .unwrap();
                if expect_ok {
                    assert_eq!(res.status(), StatusCode::OK);
                    ok += 1;
                } else {
                    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
                }
            }
            ok
        }));
    }

    let mut passed = 0;
    for handle in handles {
        passed += handle.await.unwrap();
    }

    let expected: usize = (0..concurrency)
        .map(|t| (0..requests_per_task).filter(|i| (t + i) % 3 != 0).count())
        .sum();
    assert_eq!(passed, expected);
    assert!(start.elapsed() < Duration::from_secs(30));
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let server = common::start_server().await;

    let mut bodies = Vec::new();
    for _ in 0..10 {
        let res = server
            .client
            .get(server.url("/bronze/hello"))
            .query(&[("name", "same_name")])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        bodies.push(res.text().await.unwrap());
    }
    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}
