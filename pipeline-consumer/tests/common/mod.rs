use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use pipeline_common::metrics::serve_on;
use pipeline_common::upstream::UpstreamClient;
use pipeline_consumer::fetch::FetchClient;
use tokio::net::TcpListener;
use url::Url;

/// Serve `app` on an ephemeral local port until the test runtime goes away.
pub async fn spawn_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(serve_on(listener, app, std::future::pending()));

    addr
}

pub fn upstream(addr: SocketAddr) -> UpstreamClient {
    UpstreamClient::new(
        Url::parse(&format!("http://{addr}")).unwrap(),
        Duration::from_secs(5),
        "pipeline-test",
    )
    .expect("failed to build upstream client")
}

pub fn fetch_client(addr: SocketAddr) -> FetchClient {
    FetchClient::new(upstream(addr))
}
