//! spoofcheck-api - Deepfake audio detection service
//!
//! HTTP front end for an AASIST spoofing countermeasure model. Exposes a
//! prediction endpoint for uploaded WAV/FLAC clips plus health checks.
//!
//! The model is loaded once before the listener binds; requests share it
//! read-only. A single process is sufficient since inference runs on
//! blocking worker threads.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use spoofcheck_core::SpoofDetector;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spoofcheck_api::{build_router, startup, AppState};

/// Command-line arguments for spoofcheck-api
#[derive(Parser, Debug)]
#[command(name = "spoofcheck-api")]
#[command(about = "Deepfake audio detection API")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "SPOOFCHECK_HOST")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "SPOOFCHECK_PORT")]
    port: u16,

    /// Path to the model configuration file
    #[arg(
        long,
        default_value = "aasist/config/AASIST.conf",
        env = "SPOOFCHECK_CONFIG"
    )]
    config: PathBuf,

    /// Path to the exported ONNX model
    #[arg(
        long,
        default_value = "aasist/models/AASIST.onnx",
        env = "SPOOFCHECK_WEIGHTS"
    )]
    weights: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "spoofcheck_api=info,spoofcheck_core=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting deepfake audio detection API");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    startup::check_prerequisites(&args.config, &args.weights)?;

    let started = Instant::now();
    let detector =
        SpoofDetector::load(&args.config, &args.weights).context("Failed to load model")?;
    info!("Model ready in {:.2}s", started.elapsed().as_secs_f64());

    let state = AppState::new(Some(Arc::new(detector)));
    let app = build_router(state);

    let addr = SocketAddr::from((args.host, args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
