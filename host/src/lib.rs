//! Spacecheck native messaging host
//!
//! Ephemeral stdio transport for the disk query engine, spoken by a
//! browser extension: each message is a 4-byte little-endian length
//! prefix followed by UTF-8 JSON, in both directions. The host reads
//! one request, answers it, and loops until stdin closes, so it only
//! runs while the extension has something to ask.
//!
//! # Wire format
//!
//! `[u32 LE payload length][N bytes UTF-8 JSON]` - no magic number,
//! no version field, no checksum. Request/response pairing is purely
//! positional: one in, one out, strictly serial.

pub mod dispatch;
pub mod framing;

pub use dispatch::{dispatch, run_loop, Envelope};
pub use framing::{read_frame, write_frame};
