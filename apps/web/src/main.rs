mod config;
mod content;
mod errors;
mod resume;
mod routes;
mod session;
mod state;
mod uploads;
mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::resume::record::ResumeRecord;
use crate::routes::build_router;
use crate::session::store::{MemoryBackend, SessionStore};
use crate::state::AppState;
use crate::uploads::UploadRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; every variable has a default.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio web v{}", env!("CARGO_PKG_VERSION"));

    // Resume record: loaded once, falls back to the built-in record.
    let record = ResumeRecord::load(&config.resume_data_path);
    info!("Resume record loaded for {}", record.name);

    // Upload storage directory, created if absent.
    let uploads = UploadRegistry::new(&config.upload_dir);
    uploads.ensure_dir().await?;
    info!("Upload storage ready at {}", config.upload_dir.display());

    // Session store: in-memory backend behind the SessionBackend seam.
    let sessions = SessionStore::with_backend(Arc::new(MemoryBackend::new()));

    let state = AppState {
        resume: Arc::new(record),
        sessions,
        uploads,
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
