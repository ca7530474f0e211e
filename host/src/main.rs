//! Native messaging host entry point
//!
//! Spawned by the browser on demand; speaks the framed protocol on
//! stdin/stdout and exits when the extension closes the pipe. Logging
//! goes to stderr - stdout belongs to the protocol.

use std::process;

use spacecheck_core::{DiskEngine, ErrorReport, Limits};
use spacecheck_host::{run_loop, write_frame};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    spacecheck_core::init_tracing("spacecheck_host")?;
    tracing::info!("Starting spacecheck native messaging host");

    let engine = DiskEngine::with_system_probe(Limits::DECIMAL);

    let mut stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();

    if let Err(err) = run_loop(&engine, &mut stdin, &mut stdout).await {
        tracing::error!("host loop failed: {err:#}");

        // One terminal failure frame, then a non-zero exit. Best
        // effort: the pipe may already be gone.
        let report = ErrorReport::new(format!("Internal error: {err:#}"));
        if let Ok(payload) = serde_json::to_vec(&report) {
            let _ = write_frame(&mut stdout, &payload).await;
        }
        process::exit(1);
    }

    tracing::info!("input closed, shutting down");
    Ok(())
}
