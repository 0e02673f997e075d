//! CareHub Server Binary
//!
//! API server exposing account login-or-register and profile creation over
//! the embedded document store.
//!
//! @version 0.1.0
//! @author CareHub Development Team

use carehub_server::{create_router, AppState, ServerConfig};
use carehub_store::{DocumentStore, StoreConfig};
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;

#[derive(Parser)]
#[command(name = "carehub-server")]
#[command(about = "CareHub API Server")]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Logical database name for the document store
    #[arg(long, default_value = "carehub")]
    database: String,

    /// Disable the permissive CORS layer
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = ServerConfig::new(&args.host, args.port)
        .with_database(args.database.clone())
        .with_cors(!args.no_cors);
    let addr: SocketAddr = config.socket_addr();

    // The store is constructed here and injected; handlers never reach for
    // an implicit global handle.
    let store = DocumentStore::connect(StoreConfig {
        database: args.database,
        ..StoreConfig::default()
    });
    tracing::info!(database = store.database(), "document store ready");

    let state = AppState::new(config, store);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("CareHub Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
