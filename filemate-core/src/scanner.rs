use crate::config::{ConfigError, ExtensionFilter};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Snapshot of one directory child, taken once at scan time and never
/// refreshed mid-batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Filename, lossily decoded for display and sorting.
    pub name: String,
    /// Filename without its final extension.
    pub stem: String,
    /// Final extension in its original case, without the dot.
    pub extension: Option<String>,
    pub is_symlink: bool,
}

impl FileEntry {
    fn from_walkdir(entry: &walkdir::DirEntry) -> Self {
        let path = entry.path().to_path_buf();
        let name = entry.file_name().to_string_lossy().into_owned();
        let stem = path
            .file_stem()
            .map_or_else(|| name.clone(), |s| s.to_string_lossy().into_owned());
        let extension = path.extension().map(|e| e.to_string_lossy().into_owned());
        Self {
            path,
            name,
            stem,
            extension,
            is_symlink: entry.file_type().is_symlink(),
        }
    }

    /// Dot-prefixed extension, or an empty string when there is none.
    pub fn suffix(&self) -> String {
        self.extension
            .as_ref()
            .map_or_else(String::new, |e| format!(".{e}"))
    }
}

/// Selection criteria applied while scanning.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanFilter<'a> {
    pub extensions: Option<&'a ExtensionFilter>,
    /// Exact, case-sensitive filename prefix.
    pub prefix: Option<&'a str>,
    /// Drop (and count) files already carrying this suffix; used by the
    /// extension-change engine. Normalized dot-prefixed lowercase.
    pub skip_suffix: Option<&'a str>,
}

/// Result of a directory scan: candidates in deterministic order, plus
/// counts for entries excluded by policy rather than by filter.
#[derive(Debug, Default)]
pub struct CandidateSet {
    /// Eligible entries sorted by filename; symlinks survive here so
    /// the orchestrator can record them as skipped.
    pub entries: Vec<FileEntry>,
    /// Files dropped because they already had the target suffix.
    pub already_target: usize,
}

/// List the direct children of `dir` and apply `filter`.
///
/// Non-recursive; subdirectories are dropped unconditionally. Symlinks
/// that survive the prefix/extension filters are kept flagged, so the
/// orchestrator can surface them as skipped; ones the filters exclude
/// are silently dropped like any other non-matching entry. Entries are
/// sorted by filename using plain code-point ordering, which fixes the
/// index assignment order across platforms. Pure read, no mutation.
pub fn scan_directory(dir: &Path, filter: &ScanFilter<'_>) -> Result<CandidateSet, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory(dir.to_path_buf()));
    }

    let mut set = CandidateSet::default();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let Ok(entry) = entry else { continue };
        if entry.file_type().is_dir() {
            continue;
        }

        let file = FileEntry::from_walkdir(&entry);
        if let Some(prefix) = filter.prefix {
            if !file.name.starts_with(prefix) {
                continue;
            }
        }
        if let Some(extensions) = filter.extensions {
            if !extensions.matches(&file.suffix()) {
                continue;
            }
        }
        if file.is_symlink {
            set.entries.push(file);
            continue;
        }
        if let Some(skip) = filter.skip_suffix {
            if file.suffix().eq_ignore_ascii_case(skip) {
                set.already_target += 1;
                continue;
            }
        }
        set.entries.push(file);
    }

    set.entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    fn names(set: &CandidateSet) -> Vec<&str> {
        set.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_filename() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.txt");
        touch(temp.path(), "a.txt");
        touch(temp.path(), "c.txt");

        let set = scan_directory(temp.path(), &ScanFilter::default()).unwrap();
        assert_eq!(names(&set), vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_subdirectories_excluded() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.txt");
        fs::create_dir(temp.path().join("sub")).unwrap();
        touch(&temp.path().join("sub"), "nested.txt");

        let set = scan_directory(temp.path(), &ScanFilter::default()).unwrap();
        assert_eq!(names(&set), vec!["a.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_kept_flagged() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "real.txt");
        std::os::unix::fs::symlink(temp.path().join("real.txt"), temp.path().join("link.txt"))
            .unwrap();

        let set = scan_directory(temp.path(), &ScanFilter::default()).unwrap();
        assert_eq!(names(&set), vec!["link.txt", "real.txt"]);
        assert!(set.entries[0].is_symlink);
        assert!(!set.entries[1].is_symlink);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_matching_symlinks_are_silently_excluded() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "real.jpg");
        std::os::unix::fs::symlink(temp.path().join("real.jpg"), temp.path().join("link.txt"))
            .unwrap();
        std::os::unix::fs::symlink(temp.path().join("real.jpg"), temp.path().join("link.jpg"))
            .unwrap();

        let filter = ExtensionFilter::parse("jpg").unwrap();
        let set = scan_directory(
            temp.path(),
            &ScanFilter {
                extensions: Some(&filter),
                ..ScanFilter::default()
            },
        )
        .unwrap();
        // link.txt fails the filter and is dropped like any other
        // non-matching entry; link.jpg matches and stays flagged.
        assert_eq!(names(&set), vec!["link.jpg", "real.jpg"]);
        assert!(set.entries[0].is_symlink);
    }

    #[test]
    fn test_extension_filter_case_insensitive() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "photo.JPG");
        touch(temp.path(), "photo.png");
        touch(temp.path(), "notes.txt");
        touch(temp.path(), "no_extension");

        let filter = ExtensionFilter::parse("jpg,.PNG").unwrap();
        let set = scan_directory(
            temp.path(),
            &ScanFilter {
                extensions: Some(&filter),
                ..ScanFilter::default()
            },
        )
        .unwrap();
        assert_eq!(names(&set), vec!["photo.JPG", "photo.png"]);
    }

    #[test]
    fn test_prefix_filter_case_sensitive() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "IMG_001.jpg");
        touch(temp.path(), "img_002.jpg");
        touch(temp.path(), "IMG_003.jpg");

        let set = scan_directory(
            temp.path(),
            &ScanFilter {
                prefix: Some("IMG_"),
                ..ScanFilter::default()
            },
        )
        .unwrap();
        assert_eq!(names(&set), vec!["IMG_001.jpg", "IMG_003.jpg"]);
    }

    #[test]
    fn test_skip_suffix_counts_already_target() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.png");
        touch(temp.path(), "b.webp");
        touch(temp.path(), "c.WEBP");

        let set = scan_directory(
            temp.path(),
            &ScanFilter {
                skip_suffix: Some(".webp"),
                ..ScanFilter::default()
            },
        )
        .unwrap();
        assert_eq!(names(&set), vec!["a.png"]);
        assert_eq!(set.already_target, 2);
    }

    #[test]
    fn test_missing_directory_is_config_error() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("gone");
        let err = scan_directory(&gone, &ScanFilter::default()).unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(_)));
    }

    #[test]
    fn test_entry_stem_and_suffix() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "archive.tar.gz");
        touch(temp.path(), "README");

        let set = scan_directory(temp.path(), &ScanFilter::default()).unwrap();
        let archive = &set.entries[1];
        assert_eq!(archive.stem, "archive.tar");
        assert_eq!(archive.suffix(), ".gz");

        let readme = &set.entries[0];
        assert_eq!(readme.stem, "README");
        assert_eq!(readme.suffix(), "");
    }
}
