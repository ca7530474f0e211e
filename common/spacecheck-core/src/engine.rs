//! Disk query engine
//!
//! Transport-agnostic core shared by the stdio host and the HTTP
//! server: normalize the path, stat the mount, decide. Every outcome
//! is returned as a value; the transports own serialization, logging,
//! and status codes.

use std::path::PathBuf;

use crate::config::Limits;
use crate::error::AccessError;
use crate::path;
use crate::report::{round2, CheckReport, InfoReport};
use crate::usage::{DiskUsage, SystemProbe, UsageProbe};

/// The shared disk query engine.
///
/// Holds the immutable [`Limits`] and the host-system [`UsageProbe`].
/// Construction is the only configuration point; per-request state is
/// local and discarded after the response is built.
pub struct DiskEngine {
    limits: Limits,
    probe: Box<dyn UsageProbe>,
}

/// Everything a `check` decided, before rendering.
///
/// Carries the raw inputs of the decision so transports can log the
/// requested and required sizes without recomputing them.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub usage: DiskUsage,
    pub reserved: u64,
    /// Requested size after defaulting.
    pub size: u64,
    /// `size + reserved`.
    pub required: u64,
    pub path: PathBuf,
}

impl CheckOutcome {
    /// Whether the mount can hold the requested size plus the margin.
    pub fn sufficient(&self) -> bool {
        self.usage.free >= self.required
    }

    /// Render the wire payload, with the shortfall message in the
    /// transport's GB unit when space is insufficient.
    pub fn report(&self, limits: &Limits) -> CheckReport {
        let error = if self.sufficient() {
            None
        } else {
            Some(format!(
                "Not enough space. Free: {:.2} GB, Required: {:.2} GB",
                limits.to_gb(self.usage.free),
                limits.to_gb(self.required),
            ))
        };

        CheckReport {
            ok: error.is_none(),
            total: self.usage.total,
            used: self.usage.used,
            free: self.usage.free,
            reserved: self.reserved,
            error,
        }
    }
}

impl DiskEngine {
    pub fn new(limits: Limits, probe: Box<dyn UsageProbe>) -> Self {
        Self { limits, probe }
    }

    /// Engine backed by the real system disk list.
    pub fn with_system_probe(limits: Limits) -> Self {
        Self::new(limits, Box::new(SystemProbe))
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Usage snapshot for `path`, with GB conversions and percent used.
    pub fn info(&self, path: &str) -> Result<InfoReport, AccessError> {
        let (resolved, usage) = self.lookup(path)?;

        let percent_used = if usage.total > 0 {
            usage.used as f64 / usage.total as f64 * 100.0
        } else {
            0.0
        };

        Ok(InfoReport {
            ok: true,
            path: resolved.display().to_string(),
            total: usage.total,
            used: usage.used,
            free: usage.free,
            percent_used: round2(percent_used),
            total_gb: round2(self.limits.to_gb(usage.total)),
            used_gb: round2(self.limits.to_gb(usage.used)),
            free_gb: round2(self.limits.to_gb(usage.free)),
        })
    }

    /// Decide whether `path`'s mount can hold `size` bytes plus the
    /// reserved margin. A missing or zero `size` falls back to the
    /// configured default.
    pub fn check(&self, size: Option<u64>, path: &str) -> Result<CheckOutcome, AccessError> {
        let size = match size {
            Some(size) if size > 0 => size,
            _ => self.limits.default_min_size,
        };
        let required = size.saturating_add(self.limits.reserved_space);

        let (resolved, usage) = self.lookup(path)?;

        Ok(CheckOutcome {
            usage,
            reserved: self.limits.reserved_space,
            size,
            required,
            path: resolved,
        })
    }

    fn lookup(&self, path: &str) -> Result<(PathBuf, DiskUsage), AccessError> {
        let resolved = path::normalize(path, self.probe.home_dir())
            .map_err(|e| AccessError::new(path, e))?;
        let usage = self
            .probe
            .disk_usage(&resolved)
            .map_err(|e| AccessError::new(path, e))?;
        Ok((resolved, usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    /// Probe returning fixed numbers regardless of the path.
    struct FixedProbe(DiskUsage);

    impl UsageProbe for FixedProbe {
        fn disk_usage(&self, _path: &Path) -> io::Result<DiskUsage> {
            Ok(self.0)
        }

        fn home_dir(&self) -> Option<PathBuf> {
            None
        }
    }

    /// Probe whose stat call always fails.
    struct DeniedProbe;

    impl UsageProbe for DeniedProbe {
        fn disk_usage(&self, _path: &Path) -> io::Result<DiskUsage> {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ))
        }
    }

    fn engine_with(usage: DiskUsage, limits: Limits) -> DiskEngine {
        DiskEngine::new(limits, Box::new(FixedProbe(usage)))
    }

    fn ten_gb_free() -> DiskUsage {
        DiskUsage {
            total: 50_000_000_000,
            used: 40_000_000_000,
            free: 10_000_000_000,
        }
    }

    #[test]
    fn check_passes_when_free_covers_size_plus_reserve() {
        // 2 GB requested + 5 GB reserved = 7 GB required < 10 GB free.
        let engine = engine_with(ten_gb_free(), Limits::DECIMAL);
        let outcome = engine.check(Some(2_000_000_000), "/").unwrap();

        assert!(outcome.sufficient());
        assert_eq!(outcome.required, 7_000_000_000);

        let report = outcome.report(engine.limits());
        assert!(report.ok);
        assert_eq!(report.reserved, 5_000_000_000);
        assert_eq!(report.error, None);
    }

    #[test]
    fn check_fails_when_required_exceeds_free() {
        let engine = engine_with(ten_gb_free(), Limits::DECIMAL);
        let outcome = engine.check(Some(8_000_000_000), "/").unwrap();

        assert!(!outcome.sufficient());

        let report = outcome.report(engine.limits());
        assert!(!report.ok);
        assert_eq!(report.free, 10_000_000_000);
        assert_eq!(
            report.error.as_deref(),
            Some("Not enough space. Free: 10.00 GB, Required: 13.00 GB")
        );
    }

    #[test]
    fn check_boundary_free_exactly_required_is_sufficient() {
        let engine = engine_with(ten_gb_free(), Limits::DECIMAL);
        let outcome = engine.check(Some(5_000_000_000), "/").unwrap();
        assert_eq!(outcome.required, outcome.usage.free);
        assert!(outcome.sufficient());
    }

    #[test]
    fn omitted_size_matches_explicit_default() {
        let engine = engine_with(ten_gb_free(), Limits::DECIMAL);
        let implicit = engine.check(None, "/").unwrap();
        let explicit = engine
            .check(Some(Limits::DECIMAL.default_min_size), "/")
            .unwrap();
        assert_eq!(implicit.size, explicit.size);
        assert_eq!(implicit.required, explicit.required);
    }

    #[test]
    fn zero_size_falls_back_to_default() {
        let engine = engine_with(ten_gb_free(), Limits::DECIMAL);
        let outcome = engine.check(Some(0), "/").unwrap();
        assert_eq!(outcome.size, Limits::DECIMAL.default_min_size);
    }

    #[test]
    fn info_reports_rounded_percent_and_gb() {
        let engine = engine_with(
            DiskUsage {
                total: 3_000_000_000,
                used: 1_000_000_000,
                free: 2_000_000_000,
            },
            Limits::DECIMAL,
        );
        let report = engine.info("/").unwrap();

        assert!(report.ok);
        assert_eq!(report.percent_used, 33.33);
        assert_eq!(report.total_gb, 3.0);
        assert_eq!(report.used_gb, 1.0);
        assert_eq!(report.free_gb, 2.0);
        assert_eq!(report.path, "/");
    }

    #[test]
    fn info_percent_is_zero_on_empty_total() {
        let engine = engine_with(
            DiskUsage {
                total: 0,
                used: 0,
                free: 0,
            },
            Limits::DECIMAL,
        );
        assert_eq!(engine.info("/").unwrap().percent_used, 0.0);
    }

    #[test]
    fn info_on_nonexistent_path_is_an_access_error() {
        let engine = engine_with(ten_gb_free(), Limits::DECIMAL);
        let err = engine.info("/definitely/not/a/real/path").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Path '/definitely/not/a/real/path' not accessible:"));
    }

    #[test]
    fn check_surfaces_probe_failures() {
        let engine = DiskEngine::new(Limits::DECIMAL, Box::new(DeniedProbe));
        let err = engine.check(None, "/").unwrap_err();
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn binary_limits_change_the_shortfall_units() {
        // 10^9 free reads as ~0.93 GiB under the binary base.
        let engine = engine_with(
            DiskUsage {
                total: 2_000_000_000,
                used: 1_000_000_000,
                free: 1_000_000_000,
            },
            Limits::BINARY,
        );
        let report = engine.check(None, "/").unwrap().report(engine.limits());
        assert!(!report.ok);
        assert_eq!(report.reserved, 5 * (1 << 30));
        assert_eq!(
            report.error.as_deref(),
            Some("Not enough space. Free: 0.93 GB, Required: 6.00 GB")
        );
    }
}
