//! Disk usage lookup
//!
//! The one call delegated to the host system: given a resolved path,
//! return total/used/free byte counts for the mount containing it.
//! [`UsageProbe`] is the seam; [`SystemProbe`] is the production
//! implementation backed by `sysinfo`. Tests inject fixed probes.

use std::io;
use std::path::{Path, PathBuf};

use sysinfo::Disks;

/// Byte counts for the mount containing a path, as reported by the OS.
///
/// `used + free == total` is the OS's claim, not verified here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Host-system capabilities the engine depends on.
pub trait UsageProbe: Send + Sync {
    /// Total/used/free bytes for the mount containing `path`.
    ///
    /// `path` has already been normalized; an error here is an OS-level
    /// access failure and is surfaced verbatim to the caller.
    fn disk_usage(&self, path: &Path) -> io::Result<DiskUsage>;

    /// The caller's home directory, if the platform can name one.
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Production probe backed by the `sysinfo` disk list.
pub struct SystemProbe;

impl UsageProbe for SystemProbe {
    fn disk_usage(&self, path: &Path) -> io::Result<DiskUsage> {
        let disks = Disks::new_with_refreshed_list();

        // The mount with the longest prefix of the path is the one
        // actually holding it ("/" matches everything).
        let disk = disks
            .iter()
            .filter(|disk| path.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no mount point found for {}", path.display()),
                )
            })?;

        let total = disk.total_space();
        let free = disk.available_space();
        tracing::debug!(
            mount = %disk.mount_point().display(),
            total,
            free,
            "resolved mount for path"
        );

        Ok(DiskUsage {
            total,
            used: total.saturating_sub(free),
            free,
        })
    }
}
