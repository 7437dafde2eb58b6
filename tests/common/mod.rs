//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tempfile::TempDir;
use tokio::net::TcpListener;

use flatfile_api::{ApiConfig, HttpServer, Shutdown};

/// A running server on an ephemeral port with a scratch data directory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    // Held so the scratch data dir outlives the test.
    _data_dir: TempDir,
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

/// Boot the full server stack against a fresh data directory.
pub async fn spawn_server() -> TestServer {
    let data_dir = tempfile::tempdir().unwrap();

    let mut config = ApiConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.storage.data_dir = data_dir.path().to_path_buf();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        shutdown,
        _data_dir: data_dir,
    }
}

/// A reqwest client that never picks up a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
