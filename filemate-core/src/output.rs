use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Per-file result category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Renamed,
    Moved,
    DryRun,
    SkippedConflict,
    SkippedPermission,
    SkippedOther,
    SkippedSymlink,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Renamed => "renamed",
            Self::Moved => "moved",
            Self::DryRun => "dry run",
            Self::SkippedConflict => "skipped (conflict)",
            Self::SkippedPermission => "skipped (permission)",
            Self::SkippedOther => "skipped (error)",
            Self::SkippedSymlink => "skipped (symlink)",
        };
        f.write_str(label)
    }
}

/// One processed (or skipped) file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub source: PathBuf,
    /// Resolved target, when one was assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,
    pub status: OutcomeStatus,
    /// Human-readable reason for skips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Outcome {
    pub fn renamed(source: &Path, target: &Path) -> Self {
        Self::with_target(source, target, OutcomeStatus::Renamed)
    }

    pub fn moved(source: &Path, target: &Path) -> Self {
        Self::with_target(source, target, OutcomeStatus::Moved)
    }

    pub fn dry_run(source: &Path, target: &Path) -> Self {
        Self::with_target(source, target, OutcomeStatus::DryRun)
    }

    pub fn skipped_conflict(source: &Path, detail: impl Into<String>) -> Self {
        Self {
            source: source.to_path_buf(),
            target: None,
            status: OutcomeStatus::SkippedConflict,
            detail: Some(detail.into()),
        }
    }

    pub fn skipped_permission(source: &Path, target: &Path, detail: impl Into<String>) -> Self {
        Self {
            source: source.to_path_buf(),
            target: Some(target.to_path_buf()),
            status: OutcomeStatus::SkippedPermission,
            detail: Some(detail.into()),
        }
    }

    pub fn skipped_other(source: &Path, target: &Path, detail: impl Into<String>) -> Self {
        Self {
            source: source.to_path_buf(),
            target: Some(target.to_path_buf()),
            status: OutcomeStatus::SkippedOther,
            detail: Some(detail.into()),
        }
    }

    pub fn skipped_symlink(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            target: None,
            status: OutcomeStatus::SkippedSymlink,
            detail: Some("symbolic links are never renamed".to_string()),
        }
    }

    fn with_target(source: &Path, target: &Path, status: OutcomeStatus) -> Self {
        Self {
            source: source.to_path_buf(),
            target: Some(target.to_path_buf()),
            status,
            detail: None,
        }
    }

    /// Source filename for display.
    pub fn source_name(&self) -> String {
        file_name(&self.source)
    }

    /// Target filename for display, empty when none was assigned.
    pub fn target_name(&self) -> String {
        self.target.as_deref().map_or_else(String::new, file_name)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| {
            n.to_string_lossy().into_owned()
        })
}

/// Ordered per-file outcomes for one batch, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub outcomes: Vec<Outcome>,
}

impl BatchResult {
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for outcome in &self.outcomes {
            match outcome.status {
                OutcomeStatus::Renamed => summary.renamed += 1,
                OutcomeStatus::Moved => summary.moved += 1,
                OutcomeStatus::DryRun => summary.previewed += 1,
                OutcomeStatus::SkippedConflict => summary.skipped_conflicts += 1,
                OutcomeStatus::SkippedPermission => summary.skipped_permissions += 1,
                OutcomeStatus::SkippedOther => summary.skipped_other += 1,
                OutcomeStatus::SkippedSymlink => summary.skipped_symlinks += 1,
            }
        }
        summary
    }
}

/// Counts per outcome category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub renamed: usize,
    pub moved: usize,
    pub previewed: usize,
    pub skipped_conflicts: usize,
    pub skipped_permissions: usize,
    pub skipped_other: usize,
    pub skipped_symlinks: usize,
}

/// Result of a rename operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameReport {
    pub folder: PathBuf,
    pub pattern: String,
    pub start: u32,
    pub dry_run: bool,
    pub summary: BatchSummary,
    pub batch: BatchResult,
}

impl RenameReport {
    pub fn new(folder: PathBuf, pattern: String, start: u32, dry_run: bool, batch: BatchResult) -> Self {
        Self {
            folder,
            pattern,
            start,
            dry_run,
            summary: batch.summary(),
            batch,
        }
    }
}

/// Result of a change-extension operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeExtReport {
    pub folder: PathBuf,
    pub to_extension: String,
    pub dry_run: bool,
    /// Files left alone because they already had the target extension.
    pub already_target: usize,
    pub summary: BatchSummary,
    pub batch: BatchResult,
}

impl ChangeExtReport {
    pub fn new(
        folder: PathBuf,
        to_extension: String,
        dry_run: bool,
        already_target: usize,
        batch: BatchResult,
    ) -> Self {
        Self {
            folder,
            to_extension,
            dry_run,
            already_target,
            summary: batch.summary(),
            batch,
        }
    }
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

fn write_skip_counts(out: &mut String, summary: &BatchSummary) {
    if summary.skipped_conflicts > 0 {
        let _ = writeln!(
            out,
            "Files skipped (target conflicts): {}",
            summary.skipped_conflicts
        );
    }
    if summary.skipped_permissions > 0 {
        let _ = writeln!(
            out,
            "Files skipped (permission denied): {}",
            summary.skipped_permissions
        );
    }
    if summary.skipped_other > 0 {
        let _ = writeln!(out, "Files skipped (errors): {}", summary.skipped_other);
    }
    if summary.skipped_symlinks > 0 {
        let _ = writeln!(out, "Symbolic links skipped: {}", summary.skipped_symlinks);
    }
}

impl OutputFormatter for RenameReport {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "--- Rename Summary ---");
        if self.dry_run {
            let _ = writeln!(out, "Files previewed for renaming: {}", self.summary.previewed);
        } else {
            let _ = writeln!(out, "Files renamed successfully: {}", self.summary.renamed);
            if self.summary.moved > 0 {
                let _ = writeln!(out, "Files moved successfully: {}", self.summary.moved);
            }
        }
        write_skip_counts(&mut out, &self.summary);
        out
    }
}

impl OutputFormatter for ChangeExtReport {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "--- Change Extension Summary ---");
        if self.dry_run {
            let _ = writeln!(
                out,
                "Files previewed for extension change: {}",
                self.summary.previewed
            );
        } else {
            let _ = writeln!(
                out,
                "Files extension changed successfully: {}",
                self.summary.renamed + self.summary.moved
            );
        }
        write_skip_counts(&mut out, &self.summary);
        if self.already_target > 0 {
            let _ = writeln!(
                out,
                "Files skipped (already have target extension): {}",
                self.already_target
            );
        }
        out
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> BatchResult {
        let mut batch = BatchResult::default();
        batch.push(Outcome::renamed(
            Path::new("/d/a.txt"),
            Path::new("/d/file_1.txt"),
        ));
        batch.push(Outcome::skipped_conflict(
            Path::new("/d/b.txt"),
            "target name occupied after 10 attempts",
        ));
        batch.push(Outcome::skipped_symlink(Path::new("/d/link.txt")));
        batch
    }

    #[test]
    fn test_summary_counts() {
        let summary = sample_batch().summary();
        assert_eq!(summary.renamed, 1);
        assert_eq!(summary.skipped_conflicts, 1);
        assert_eq!(summary.skipped_symlinks, 1);
        assert_eq!(summary.previewed, 0);
    }

    #[test]
    fn test_rename_summary_text() {
        let report = RenameReport::new(
            PathBuf::from("/d"),
            "file_{i}".to_string(),
            1,
            false,
            sample_batch(),
        );
        let text = report.format_summary();
        assert!(text.contains("Files renamed successfully: 1"));
        assert!(text.contains("Files skipped (target conflicts): 1"));
        assert!(text.contains("Symbolic links skipped: 1"));
        // Zero categories stay out of the summary.
        assert!(!text.contains("permission"));
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = RenameReport::new(
            PathBuf::from("/d"),
            "file_{i}".to_string(),
            1,
            true,
            sample_batch(),
        );
        let json = report.format_json();
        let parsed: RenameReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_outcome_display_names() {
        let outcome = Outcome::renamed(Path::new("/d/a.txt"), Path::new("/d/file_1.txt"));
        assert_eq!(outcome.source_name(), "a.txt");
        assert_eq!(outcome.target_name(), "file_1.txt");
        assert_eq!(outcome.status.to_string(), "renamed");
    }
}
