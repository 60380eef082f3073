use crate::apply::execute;
use crate::config::ChangeExtConfig;
use crate::conflict::{FsProbe, PathProbe, TargetClaims};
use crate::output::{BatchResult, ChangeExtReport, Outcome, OutcomeStatus};
use crate::scanner::{scan_directory, ScanFilter};
use anyhow::{Context, Result};
use std::fs;

/// Rewrite the extensions of the direct children of the configured
/// directory, keeping each file's stem.
///
/// Near-duplicate of the rename orchestrator, but the target stem is
/// fixed so there is no index to advance: an occupied target is an
/// immediate conflict unless `force` is set.
pub fn change_ext_operation(config: &ChangeExtConfig) -> Result<ChangeExtReport> {
    change_ext_operation_with_probe(config, &FsProbe)
}

pub fn change_ext_operation_with_probe(
    config: &ChangeExtConfig,
    probe: &dyn PathProbe,
) -> Result<ChangeExtReport> {
    let extension = config.validate()?;

    let skip_suffix = extension.to_ascii_lowercase();
    let filter = ScanFilter {
        extensions: config.from_extensions.as_ref(),
        prefix: config.prefix.as_deref(),
        skip_suffix: Some(&skip_suffix),
    };
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

    for entry in &scan.entries {
        if entry.is_symlink {
            batch.push(Outcome::skipped_symlink(&entry.path));
            continue;
        }

        let target = target_dir.join(format!("{}{}", entry.stem, extension));
        if claims.try_claim(&entry.path, &target, config.force) {
            let outcome = execute(
                &entry.path,
                &target,
                config.dry_run,
                config.force,
                cross_dir,
            );
            if matches!(
                outcome.status,
                OutcomeStatus::Renamed | OutcomeStatus::Moved | OutcomeStatus::DryRun
            ) {
                claims.release(entry.path.clone());
            }
            batch.push(outcome);
        } else {
            batch.push(Outcome::skipped_conflict(
                &entry.path,
                format!("target {} already exists", target.display()),
            ));
        }
    }

    Ok(ChangeExtReport::new(
        config.folder.clone(),
        extension,
        config.dry_run,
        scan.already_target,
        batch,
    ))
}
