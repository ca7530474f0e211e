//! Command dispatch and the host control loop
//!
//! The loop alternates between two phases: blocked on the next frame,
//! and dispatching the one message it just read. Dispatch itself never
//! fails - every engine outcome becomes a response payload. Only frame
//! I/O faults and malformed JSON escape to the caller, which reports
//! them once and exits non-zero.

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};

use spacecheck_core::{DiskEngine, ErrorReport, WireResponse};

use crate::framing::{read_frame, write_frame};

/// One request as sent by the extension.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// Accepted as a JSON number or a numeric string; anything else
    /// falls back to the engine's default size.
    #[serde(default)]
    pub size: Option<Value>,
}

fn parse_size(value: Option<&Value>) -> Option<u64> {
    match value? {
        // Floats are truncated toward zero, same as an int() coercion.
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|size| size as u64))
            .filter(|size| *size > 0),
        Value::String(s) => s.trim().parse::<u64>().ok().filter(|size| *size > 0),
        _ => None,
    }
}

/// Answer one request. Infallible: engine errors become failure payloads.
pub fn dispatch(engine: &DiskEngine, request: &Envelope) -> WireResponse {
    match request.command.as_deref() {
        Some("info") => {
            let path = request.path.as_deref().unwrap_or("/");
            match engine.info(path) {
                Ok(report) => report.into(),
                Err(err) => ErrorReport::new(err.to_string()).into(),
            }
        }
        Some("check") => {
            let path = request.path.as_deref().unwrap_or("/");
            let size = parse_size(request.size.as_ref());
            match engine.check(size, path) {
                Ok(outcome) => outcome.report(engine.limits()).into(),
                Err(err) => ErrorReport::new(err.to_string()).into(),
            }
        }
        Some("ping") => WireResponse::pong(),
        other => {
            ErrorReport::new(format!("Unknown command: {}", other.unwrap_or("(none)"))).into()
        }
    }
}

/// Serve framed requests until the input stream closes.
///
/// Strictly serial: each frame is fully answered and flushed before
/// the next read. An `Err` here is an internal fault; the caller owns
/// the terminal failure frame and the non-zero exit.
pub async fn run_loop<R, W>(
    engine: &DiskEngine,
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    while let Some(frame) = read_frame(reader).await? {
        let request: Envelope =
            serde_json::from_slice(&frame).context("malformed request frame")?;
        tracing::debug!(command = ?request.command, "dispatching request");

        let response = dispatch(engine, &request);
        let payload = serde_json::to_vec(&response)?;
        write_frame(writer, &payload).await?;
    }
    Ok(())
}
