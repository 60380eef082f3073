use crate::output::Outcome;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Perform (or simulate) one confirmed rename/move.
///
/// Dry-run records the exact target a live run would use and touches
/// nothing. Live failures are captured as per-file outcomes; this
/// function never propagates an error, so a multi-file batch always
/// completes and reports per-file status.
pub fn execute(source: &Path, target: &Path, dry_run: bool, force: bool, cross_dir: bool) -> Outcome {
    if dry_run {
        return Outcome::dry_run(source, target);
    }

    match perform(source, target, force, cross_dir) {
        Ok(()) if cross_dir => Outcome::moved(source, target),
        Ok(()) => Outcome::renamed(source, target),
        Err(e) => match e.kind() {
            ErrorKind::PermissionDenied => Outcome::skipped_permission(source, target, e.to_string()),
            // Lost the check-then-use race against a concurrent writer.
            ErrorKind::AlreadyExists => Outcome::skipped_conflict(source, e.to_string()),
            _ => Outcome::skipped_other(source, target, e.to_string()),
        },
    }
}

fn perform(source: &Path, target: &Path, force: bool, cross_dir: bool) -> io::Result<()> {
    if source == target {
        // Self-rename confirmed by conflict resolution; nothing to do.
        return Ok(());
    }

    // `rename` replaces atomically on Unix but errors on Windows when
    // the target exists, so a forced overwrite clears it first.
    if force && target.symlink_metadata().is_ok() {
        fs::remove_file(target)?;
    }

    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(_) if cross_dir => {
            // Likely a cross-device move; copy then remove, as a shell
            // `mv` would.
            fs::copy(source, target)?;
            fs::remove_file(source)
        },
        Err(e) => Err(e),
    }
}
