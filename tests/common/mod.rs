//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use regex_test_server::config::ServerConfig;
use regex_test_server::http::HttpServer;
use regex_test_server::runner::{TestCommand, TestResult, TestRunner};

/// A runner double that records every command and answers a fixed payload.
pub struct RecordingRunner {
    pub commands: Mutex<Vec<TestCommand>>,
    reply: serde_json::Value,
}

impl RecordingRunner {
    pub fn new(reply: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            commands: Mutex::new(Vec::new()),
            reply,
        })
    }

    #[allow(dead_code)]
    pub fn recorded(&self) -> Vec<TestCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl TestRunner for RecordingRunner {
    fn run<'a>(
        &'a self,
        command: &'a TestCommand,
    ) -> Pin<Box<dyn Future<Output = TestResult> + Send + 'a>> {
        Box::pin(async move {
            self.commands.lock().unwrap().push(command.clone());
            self.reply.clone()
        })
    }
}

/// Spawn a server with default config on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_server(runner: Arc<dyn TestRunner>) -> SocketAddr {
    spawn_server_with_config(ServerConfig::default(), runner).await
}

/// Spawn a server with the given config on an ephemeral port and wait until
/// it answers.
#[allow(dead_code)]
pub async fn spawn_server_with_config(
    config: ServerConfig,
    runner: Arc<dyn TestRunner>,
) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, runner).expect("server construction failed");
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    wait_until_ready(addr).await;
    addr
}

async fn wait_until_ready(addr: SocketAddr) {
    let client = reqwest::Client::new();
    for _ in 0..50 {
        if client
            .get(format!("http://{}/", addr))
            .send()
            .await
            .is_ok()
        {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server at {addr} never became ready");
}
