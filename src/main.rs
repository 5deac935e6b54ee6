use clap::Parser;
use miette::{IntoDiagnostic, Result};
use receipt_points::application::engine::ReceiptEngine;
use receipt_points::config::ServerConfig;
use receipt_points::domain::ports::ReceiptStoreBox;
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_points::interfaces::http::ReceiptServer;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value_t = ServerConfig::default().bind_addr)]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Receipts live for the lifetime of the process
    let store: ReceiptStoreBox = Box::new(InMemoryReceiptStore::new());
    let engine = ReceiptEngine::new(store);

    let server = ReceiptServer::new(ServerConfig::new(cli.bind), engine);
    server.serve(shutdown_signal()).await.into_diagnostic()?;

    tracing::info!("receipt server stopped");
    Ok(())
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "receipt_points=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(e) => {
            // Without a signal handler, keep serving until the process is killed
            tracing::error!("failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
