//! Loopback disk monitor entry point
//!
//! Long-lived counterpart to the native messaging host: the same
//! engine behind `GET /info` and `GET /check`, bound to 127.0.0.1 for
//! pages that poll over HTTP instead of spawning the host.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use spacecheck_core::{DiskEngine, Limits};

mod routes;

use routes::AppState;

#[derive(Parser)]
#[command(name = "spacecheck-server")]
#[command(about = "Loopback HTTP server answering disk space queries")]
struct Cli {
    /// Port to listen on (loopback only)
    #[arg(long, env = "SPACECHECK_PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    spacecheck_core::init_tracing("spacecheck_server")?;

    let cli = Cli::parse();

    let state = AppState {
        engine: Arc::new(DiskEngine::with_system_probe(Limits::BINARY)),
    };
    let app = routes::create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    tracing::info!("Starting local disk monitor on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
