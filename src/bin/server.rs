//! MindDeck backend: serves the shared deck collection over HTTP.

use minddeck_app::server::{ServerState, router};
use std::path::PathBuf;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let data_file = std::env::var("MINDDECK_DATA").unwrap_or_else(|_| "data.json".to_string());

    let state = ServerState::open(PathBuf::from(&data_file));
    let app = router(state).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("MindDeck server running on http://localhost:{port} (data: {data_file})");
    axum::serve(listener, app).await?;
    Ok(())
}
