use std::fs;
use std::io;
use std::path::Path;
use tracing::{error, info};

/// Outcome of a startup sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    pub removed: usize,
    pub failed: usize,
}

/// Check whether the file name of `path` ends with `extension`.
///
/// Literal and case-sensitive: "shot.TGA" does not match ".tga".
pub fn is_matching_file(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}

/// Remove every matching entry directly inside `dir`.
///
/// A failed removal is logged and counted, then the sweep moves on. Only a
/// failure to list `dir` itself is returned.
pub fn sweep(dir: &Path, extension: &str) -> io::Result<SweepReport> {
    let mut report = SweepReport::default();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!(dir = %dir.display(), error = %e, "Failed to read directory entry");
                report.failed += 1;
                continue;
            }
        };

        let path = entry.path();
        if !is_matching_file(&path, extension) {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "Removed old screenshot");
                report.removed += 1;
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to remove old screenshot");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
