use std::path::PathBuf;

use super::*;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn temp_site(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("edubox-site-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    root
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn(base_routes(&temp_site("health"))).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn pkg_serves_bundle_files() {
    let root = temp_site("pkg");
    std::fs::write(root.join("pkg").join("edubox.css"), "body{}").unwrap();
    let base = spawn(base_routes(&root)).await;

    let resp = reqwest::get(format!("{base}/pkg/edubox.css")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "body{}");
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let base = spawn(base_routes(&temp_site("missing"))).await;
    let resp = reqwest::get(format!("{base}/pkg/nope.wasm")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
