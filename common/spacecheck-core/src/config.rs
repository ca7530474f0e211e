//! Engine configuration
//!
//! The engine's two tuning knobs are fixed at construction and never
//! mutated afterwards: the size assumed for a check when the caller
//! does not supply one, and the safety margin always kept free on top
//! of the requested size.
//!
//! The two transports historically grew different unit bases and both
//! are kept: the stdio host reports decimal gigabytes (10^9 bytes, what
//! the browser extension displays), while the HTTP server reports
//! binary gibibytes (2^30 bytes). [`Limits::DECIMAL`] and
//! [`Limits::BINARY`] capture the two conventions.

/// Immutable sizing limits injected into [`DiskEngine`](crate::DiskEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Assumed download size when the caller omits or sends a bogus one.
    pub default_min_size: u64,
    /// Safety margin always kept free on top of the requested size.
    pub reserved_space: u64,
    /// Divisor for rendering byte counts as "GB" display fields.
    pub bytes_per_gb: u64,
}

const GB: u64 = 1_000_000_000;
const GIB: u64 = 1 << 30;

impl Limits {
    /// Decimal (10^9) units: 1 GB default, 5 GB reserved. Used by the
    /// native messaging host.
    pub const DECIMAL: Limits = Limits {
        default_min_size: GB,
        reserved_space: 5 * GB,
        bytes_per_gb: GB,
    };

    /// Binary (2^30) units: 1 GiB default, 5 GiB reserved. Used by the
    /// loopback HTTP server.
    pub const BINARY: Limits = Limits {
        default_min_size: GIB,
        reserved_space: 5 * GIB,
        bytes_per_gb: GIB,
    };

    /// Convert a byte count to this limit set's GB display unit.
    pub fn to_gb(&self, bytes: u64) -> f64 {
        bytes as f64 / self.bytes_per_gb as f64
    }
}
