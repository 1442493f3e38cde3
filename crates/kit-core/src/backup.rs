//! Backup of an existing installation before it is replaced
//!
//! The existing path is renamed to `<path>.backup-<UTC timestamp>`; a
//! numeric suffix is added if that name is taken.

use crate::Result;
use chrono::{DateTime, Utc};
use kit_fs::{NormalizedPath, io};

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Backup location for `path` at `timestamp`.
pub fn backup_path(path: &NormalizedPath, timestamp: DateTime<Utc>) -> NormalizedPath {
    NormalizedPath::new(format!(
        "{}.backup-{}",
        path.as_str().trim_end_matches('/'),
        timestamp.format(TIMESTAMP_FORMAT)
    ))
}

/// Move `path` out of the way. Returns the backup location, or `None` when
/// there was nothing to back up.
pub fn backup_existing(path: &NormalizedPath) -> Result<Option<NormalizedPath>> {
    if !path.exists() {
        return Ok(None);
    }

    let base = backup_path(path, Utc::now());
    let mut destination = base.clone();
    let mut attempt = 1;
    while destination.exists() {
        destination = NormalizedPath::new(format!("{}-{}", base, attempt));
        attempt += 1;
    }

    io::rename(path, &destination)?;
    tracing::info!("Backed up {} to {}", path, destination);
    Ok(Some(destination))
}
