//! Shared utilities for integration tests.

use std::net::SocketAddr;

use linguapi::config::ChallengeConfig;
use linguapi::http::HttpServer;
use linguapi::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running on an ephemeral port. Shuts down on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with the default config.
#[allow(dead_code)]
pub async fn start_server() -> TestServer {
    start_server_with(ChallengeConfig::default()).await
}

/// Start a server with the given config.
pub async fn start_server_with(mut config: ChallengeConfig) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestServer {
        addr,
        client,
        shutdown,
    }
}

/// The four default check flags in order.
#[allow(dead_code)]
pub fn default_flags() -> Vec<String> {
    ["BRZ1-HELLO-9f2a", "BRZ2-REST-1c3d", "BRZ3-ECHO-b7e4", "BRZ4-UA-5d10"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
