mod routes;

use anyhow::{Context, Result};
use clap::Parser;
use routes::{create_router, AppState};
use shared::{BriefingPipeline, BriefingStore, Config};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser)]
#[command(name = "serve-briefings")]
#[command(about = "Serve the document-to-briefing HTTP API")]
struct Args {
    /// Address to bind (overrides BRIEFING_LISTEN_ADDR)
    #[arg(short, long)]
    addr: Option<String>,

    /// Path of the briefing collection file (overrides BRIEFING_DATA_PATH)
    #[arg(short, long)]
    data_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let data_path = args.data_path.unwrap_or(config.data_path);
    let addr = args.addr.unwrap_or(config.listen_addr);

    info!("Starting briefing server v{}", env!("CARGO_PKG_VERSION"));
    info!("Data: {:?}", data_path);

    let store = BriefingStore::file(&data_path);
    let state = AppState {
        pipeline: Arc::new(BriefingPipeline::new(store.clone())),
        store,
    };

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
