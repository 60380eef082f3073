use crate::apply::execute;
use crate::config::RenameConfig;
use crate::conflict::{resolve_indexed, FsProbe, PathProbe, Resolution, TargetClaims};
use crate::output::{BatchResult, Outcome, OutcomeStatus, RenameReport};
use crate::scanner::{scan_directory, ScanFilter};
use anyhow::{Context, Result};
use std::fs;

/// Batch-rename the direct children of the configured directory.
///
/// The only `Err` here is configuration-level (invalid pattern or start
/// index, missing directory, output directory that cannot be created);
/// every per-file condition ends up as an outcome in the report.
pub fn rename_operation(config: &RenameConfig) -> Result<RenameReport> {
    rename_operation_with_probe(config, &FsProbe)
}

/// Same as [`rename_operation`], with an injected target probe so the
/// conflict logic can run against an in-memory filesystem in tests.
pub fn rename_operation_with_probe(
    config: &RenameConfig,
    probe: &dyn PathProbe,
) -> Result<RenameReport> {
    let pattern = config.validate()?;

    let filter = ScanFilter {
        extensions: config.extensions.as_ref(),
        prefix: config.prefix.as_deref(),
        skip_suffix: None,
    };
    // The scan set is fixed here; files appearing mid-run are never
    // considered.
    let scan = scan_directory(&config.folder, &filter)?;

    let target_dir = config.output_dir.as_deref().unwrap_or(&config.folder);
    let cross_dir = config.output_dir.is_some();
    if cross_dir && !config.dry_run {
        fs::create_dir_all(target_dir).with_context(|| {
            format!("failed to create output directory {}", target_dir.display())
        })?;
    }

    let mut claims = TargetClaims::new(probe);
    let mut batch = BatchResult::default();

    // Shared running index: advances by one per file that gets a target
    // assigned. Conflict retries may push an individual file further
    // without moving this counter, and skipped files never consume it.
    let mut index = config.start;
    for entry in &scan.entries {
        if entry.is_symlink {
            batch.push(Outcome::skipped_symlink(&entry.path));
            continue;
        }

        let suffix = entry.suffix();
        let resolution = resolve_indexed(
            &mut claims,
            &entry.path,
            target_dir,
            index,
            config.max_attempts,
            config.force,
            |i| format!("{}{}", pattern.render(i), suffix),
        );

        match resolution {
            Resolution::Resolved { target, .. } => {
                let outcome = execute(
                    &entry.path,
                    &target,
                    config.dry_run,
                    config.force,
                    cross_dir,
                );
                // Once the file has left its old name, that name is free
                // for later targets; a failed execution leaves the
                // source in place, so it keeps blocking.
                if matches!(
                    outcome.status,
                    OutcomeStatus::Renamed | OutcomeStatus::Moved | OutcomeStatus::DryRun
                ) {
                    claims.release(entry.path.clone());
                }
                batch.push(outcome);
                index = index.saturating_add(1);
            },
            Resolution::Exhausted { attempts } => {
                batch.push(Outcome::skipped_conflict(
                    &entry.path,
                    format!("target name occupied after {attempts} attempts"),
                ));
            },
        }
    }

    Ok(RenameReport::new(
        config.folder.clone(),
        config.pattern.clone(),
        config.start,
        config.dry_run,
        batch,
    ))
}
