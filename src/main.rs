//! tryon-web — web server for the virtual glasses try-on.
//!
//! Reads config from env vars (a `.env` file is honored):
//!   STATIC_DIR   — static asset root (default: <crate dir>/static)
//!   CATALOG_PATH — model catalog JSON (default: <static dir>/glasses_models/glasses_models_names.json)
//!   SERVER_PORT  — listen port (default: 5000)

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tryon_web::router::build_router;
use tryon_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tryon_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let static_dir = std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));
    let catalog_path = std::env::var("CATALOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| static_dir.join("glasses_models/glasses_models_names.json"));

    tracing::info!("Serving static files from: {}", static_dir.display());
    tracing::info!("Model catalog: {}", catalog_path.display());

    let state = AppState::new(catalog_path, static_dir);
    let app = build_router(state);

    let port: u16 = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Try-on server running on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Try: lsof -ti:{} | xargs kill -9",
                    port,
                    port
                );
            }
            return Err(e).context(format!("failed to bind to {}", addr));
        }
    };

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
