//! Wire payload types
//!
//! Every response either transport writes is one of four JSON shapes,
//! captured here as concrete structs plus the [`WireResponse`] sum. The
//! shapes differ only in which fields accompany the `ok` flag:
//!
//! - info success: path, raw byte counts, GB conversions, percent used
//! - check verdict: byte counts and the reserved margin, plus an
//!   `error` message only when space is insufficient
//! - ping acknowledgement: `{"ok":true,"message":"pong"}`
//! - bare failure: `{"ok":false,"error":...}`

use serde::{Deserialize, Serialize};

/// Round to two decimal places for GB and percentage display fields.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Successful `info` payload: raw bytes plus display conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoReport {
    pub ok: bool,
    pub path: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent_used: f64,
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
}

/// `check` verdict payload. `ok` is the decision; on an insufficient
/// disk the usage fields are still populated and `error` explains the
/// shortfall in GB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub ok: bool,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub reserved: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Bare failure payload for access errors and unknown commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub ok: bool,
    pub error: String,
}

impl ErrorReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Any payload a transport can write, serialized as its bare shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireResponse {
    Info(InfoReport),
    Check(CheckReport),
    Pong { ok: bool, message: String },
    Error(ErrorReport),
}

impl WireResponse {
    /// The fixed `ping` acknowledgement.
    pub fn pong() -> Self {
        WireResponse::Pong {
            ok: true,
            message: "pong".to_string(),
        }
    }
}

impl From<InfoReport> for WireResponse {
    fn from(report: InfoReport) -> Self {
        WireResponse::Info(report)
    }
}

impl From<CheckReport> for WireResponse {
    fn from(report: CheckReport) -> Self {
        WireResponse::Check(report)
    }
}

impl From<ErrorReport> for WireResponse {
    fn from(report: ErrorReport) -> Self {
        WireResponse::Error(report)
    }
}
