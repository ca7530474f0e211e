//! Spacecheck Core - Shared disk query engine
//!
//! This crate answers one question: does a filesystem location have
//! enough free space for an operation of a given size, with a safety
//! margin reserved? Two thin transports front it:
//!
//! - a native messaging host speaking length-prefixed JSON over stdio
//! - a loopback HTTP server with `/info` and `/check` endpoints
//!
//! Both delegate to [`DiskEngine`], which owns path normalization, the
//! disk usage lookup, and the sufficiency decision. The engine is pure
//! with respect to its transports: every outcome is returned as a
//! value, never logged or written from inside the decision.
//!
//! # Example
//!
//! ```rust,ignore
//! use spacecheck_core::{DiskEngine, Limits};
//!
//! let engine = DiskEngine::with_system_probe(Limits::DECIMAL);
//! let outcome = engine.check(Some(2_000_000_000), "/")?;
//! println!("sufficient: {}", outcome.sufficient());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod init;
pub mod path;
pub mod report;
pub mod usage;

// Re-export commonly used items at crate root
pub use config::Limits;
pub use engine::{CheckOutcome, DiskEngine};
pub use error::AccessError;
pub use init::init_tracing;
pub use report::{CheckReport, ErrorReport, InfoReport, WireResponse};
pub use usage::{DiskUsage, SystemProbe, UsageProbe};
