//! Path normalization
//!
//! Turns whatever the caller sent into a canonical directory path the
//! disk lookup can stat:
//!
//! 1. empty input falls back to the home directory, then to root
//! 2. a path to a regular file is replaced by its parent directory
//! 3. the result is canonicalized (symlinks followed, `..` eliminated)
//!
//! Canonicalization failure is the caller's problem and the underlying
//! `io::Error` is surfaced; only the empty-input case has a defined
//! fallback.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Normalize a caller-supplied path for a disk usage lookup.
///
/// `home` is the platform home directory, injected so tests can pin it.
pub fn normalize(path: &str, home: Option<PathBuf>) -> io::Result<PathBuf> {
    let mut candidate = if path.is_empty() {
        home.unwrap_or_else(|| PathBuf::from("/"))
    } else {
        PathBuf::from(path)
    };

    // Downloads name a target file; the mount is the directory's.
    if candidate.is_file() {
        candidate = match candidate.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("/"),
        };
    }

    let resolved = fs::canonicalize(&candidate)?;

    // Canonicalization never yields an empty path on any supported
    // platform, but an empty result must not escape to the probe.
    if resolved.as_os_str().is_empty() {
        return Ok(PathBuf::from("/"));
    }

    Ok(resolved)
}
