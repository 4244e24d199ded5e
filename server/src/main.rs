#![recursion_limit = "256"]

//! LiveText site server.
//!
//! Renders the Leptos landing page over axum and serves the compiled
//! client bundle. There is no API, no database, and no session state;
//! the binary exists to put the page on a port.

mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let app = routes::app().expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "livetext listening");
    axum::serve(listener, app).await.expect("server failed");
}
