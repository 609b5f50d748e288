//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use isolated_serve::lifecycle;
use isolated_serve::ServerConfig;

/// The header set every response must carry, lowercase names.
pub const ISOLATION_HEADERS: [(&str, &str); 5] = [
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-embedder-policy", "require-corp"),
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
];

/// Write a small site: index page, a script, and a directory without index.
pub fn write_site(root: &Path) {
    std::fs::write(root.join("index.html"), "<!doctype html><h1>ascii</h1>").unwrap();
    std::fs::write(root.join("script.js"), "console.log('hi');").unwrap();
    std::fs::create_dir(root.join("frames")).unwrap();
    std::fs::write(root.join("frames").join("001.txt"), "frame one").unwrap();
    std::fs::write(root.join("frames").join("002.txt"), "frame two").unwrap();
}

/// Start a server on an ephemeral loopback port serving `root`.
#[allow(dead_code)]
pub async fn start_server(root: &Path) -> SocketAddr {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.root_dir = root.to_path_buf();

    let ready = lifecycle::prepare(config).await.unwrap();
    let addr = ready.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = ready.run().await;
    });

    addr
}

/// Assert that each isolation header is present exactly once with its value.
pub fn assert_isolation_headers(headers: &reqwest::header::HeaderMap) {
    for (name, value) in ISOLATION_HEADERS {
        let values: Vec<_> = headers.get_all(name).iter().collect();
        assert_eq!(values, [value], "header {name}");
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
