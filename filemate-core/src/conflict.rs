use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Target-existence check, abstracted so conflict resolution can be
/// exercised against an in-memory set in tests.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem. Uses `symlink_metadata` so a
/// dangling symlink at the target still counts as occupied.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }
}

/// Tracks target paths claimed within the current batch, layered over a
/// [`PathProbe`]. A path is occupied if it exists on disk or has been
/// claimed by an earlier file of the same batch, which is what keeps
/// dry-run previews collision-free without touching the filesystem.
///
/// Sources that vacate their old name mid-batch are tracked too, so a
/// dry-run preview resolves exactly the targets a live run produces
/// even when a later file wants a name an earlier file just gave up.
pub struct TargetClaims<'a> {
    probe: &'a dyn PathProbe,
    claimed: HashSet<PathBuf>,
    released: HashSet<PathBuf>,
}

impl<'a> TargetClaims<'a> {
    pub fn new(probe: &'a dyn PathProbe) -> Self {
        Self {
            probe,
            claimed: HashSet::new(),
            released: HashSet::new(),
        }
    }

    pub fn occupied(&self, path: &Path) -> bool {
        self.claimed.contains(path)
            || (!self.released.contains(path) && self.probe.exists(path))
    }

    pub fn claim(&mut self, path: PathBuf) {
        self.claimed.insert(path);
    }

    /// Mark a source path as vacated: an earlier file of this batch has
    /// moved away from it, so it no longer blocks later targets.
    pub fn release(&mut self, path: PathBuf) {
        self.released.insert(path);
    }

    /// Claim `target` for `source` unless it is occupied. A target equal
    /// to the source itself is never a conflict (a self-rename is a
    /// trivial no-op), and `force` claims unconditionally.
    pub fn try_claim(&mut self, source: &Path, target: &Path, force: bool) -> bool {
        if force || target == source || !self.occupied(target) {
            self.claim(target.to_path_buf());
            true
        } else {
            false
        }
    }
}

/// Result of resolving one candidate against the claim set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A free (or forced) target was found at `index`.
    Resolved { target: PathBuf, index: u32 },
    /// Every candidate index was occupied.
    Exhausted { attempts: u32 },
}

/// Find a non-colliding target for `source` in `target_dir`, advancing
/// the index from `start` for at most `max_attempts` total attempts.
/// `candidate` renders the filename for a given index.
///
/// With `force` the first candidate is accepted unconditionally; there
/// is no retry loop and an existing file at that path will be
/// overwritten by the executor. The check-then-use sequence here races
/// against concurrent external changes to the directory; that is
/// accepted for a single-process interactive tool.
pub fn resolve_indexed(
    claims: &mut TargetClaims<'_>,
    source: &Path,
    target_dir: &Path,
    start: u32,
    max_attempts: u32,
    force: bool,
    mut candidate: impl FnMut(u32) -> String,
) -> Resolution {
    if force {
        let target = target_dir.join(candidate(start));
        claims.claim(target.clone());
        return Resolution::Resolved {
            target,
            index: start,
        };
    }

    for attempt in 0..max_attempts {
        // An index past u32::MAX cannot be rendered; give up with the
        // attempts made so far instead of wrapping around.
        let Some(index) = start.checked_add(attempt) else {
            return Resolution::Exhausted { attempts: attempt };
        };
        let target = target_dir.join(candidate(index));
        if claims.try_claim(source, &target, false) {
            return Resolution::Resolved { target, index };
        }
    }

    Resolution::Exhausted {
        attempts: max_attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory probe: exactly the "claimed targets" re-architecture
    /// this module exists for.
    struct SetProbe(HashSet<PathBuf>);

    impl SetProbe {
        fn of(paths: &[&str]) -> Self {
            Self(paths.iter().map(PathBuf::from).collect())
        }
    }

    impl PathProbe for SetProbe {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }
    }

    fn name(i: u32) -> String {
        format!("file_{i}.txt")
    }

    #[test]
    fn test_first_index_free() {
        let probe = SetProbe::of(&[]);
        let mut claims = TargetClaims::new(&probe);
        let resolution = resolve_indexed(
            &mut claims,
            Path::new("/d/a.txt"),
            Path::new("/d"),
            1,
            10,
            false,
            name,
        );
        assert_eq!(
            resolution,
            Resolution::Resolved {
                target: PathBuf::from("/d/file_1.txt"),
                index: 1,
            }
        );
    }

    #[test]
    fn test_advances_past_occupied_index() {
        let probe = SetProbe::of(&["/d/file_1.txt"]);
        let mut claims = TargetClaims::new(&probe);
        let resolution = resolve_indexed(
            &mut claims,
            Path::new("/d/x.txt"),
            Path::new("/d"),
            1,
            10,
            false,
            name,
        );
        assert_eq!(
            resolution,
            Resolution::Resolved {
                target: PathBuf::from("/d/file_2.txt"),
                index: 2,
            }
        );
    }

    #[test]
    fn test_claimed_targets_block_later_files() {
        let probe = SetProbe::of(&[]);
        let mut claims = TargetClaims::new(&probe);
        claims.claim(PathBuf::from("/d/file_1.txt"));
        let resolution = resolve_indexed(
            &mut claims,
            Path::new("/d/b.txt"),
            Path::new("/d"),
            1,
            10,
            false,
            name,
        );
        assert_eq!(
            resolution,
            Resolution::Resolved {
                target: PathBuf::from("/d/file_2.txt"),
                index: 2,
            }
        );
    }

    #[test]
    fn test_bounded_retry_exhaustion() {
        let occupied: Vec<String> = (1..=10).map(|i| format!("/d/file_{i}.txt")).collect();
        let refs: Vec<&str> = occupied.iter().map(String::as_str).collect();
        let probe = SetProbe::of(&refs);
        let mut claims = TargetClaims::new(&probe);

        let mut attempts_made = 0;
        let resolution = resolve_indexed(
            &mut claims,
            Path::new("/d/src.txt"),
            Path::new("/d"),
            1,
            10,
            false,
            |i| {
                attempts_made += 1;
                name(i)
            },
        );
        assert_eq!(resolution, Resolution::Exhausted { attempts: 10 });
        // No 11th candidate is ever rendered.
        assert_eq!(attempts_made, 10);
    }

    #[test]
    fn test_force_accepts_first_candidate() {
        let probe = SetProbe::of(&["/d/file_1.txt"]);
        let mut claims = TargetClaims::new(&probe);
        let resolution = resolve_indexed(
            &mut claims,
            Path::new("/d/src.txt"),
            Path::new("/d"),
            1,
            10,
            true,
            name,
        );
        assert_eq!(
            resolution,
            Resolution::Resolved {
                target: PathBuf::from("/d/file_1.txt"),
                index: 1,
            }
        );
    }

    #[test]
    fn test_self_target_is_not_a_conflict() {
        let probe = SetProbe::of(&["/d/file_1.txt"]);
        let mut claims = TargetClaims::new(&probe);
        let resolution = resolve_indexed(
            &mut claims,
            Path::new("/d/file_1.txt"),
            Path::new("/d"),
            1,
            10,
            false,
            name,
        );
        assert_eq!(
            resolution,
            Resolution::Resolved {
                target: PathBuf::from("/d/file_1.txt"),
                index: 1,
            }
        );
    }

    #[test]
    fn test_released_source_no_longer_blocks_a_target() {
        let probe = SetProbe::of(&["/d/file_2.txt"]);
        let mut claims = TargetClaims::new(&probe);
        // file_2.txt has moved to file_1.txt; its old name is free now.
        claims.claim(PathBuf::from("/d/file_1.txt"));
        claims.release(PathBuf::from("/d/file_2.txt"));

        let resolution = resolve_indexed(
            &mut claims,
            Path::new("/d/z.txt"),
            Path::new("/d"),
            2,
            10,
            false,
            name,
        );
        assert_eq!(
            resolution,
            Resolution::Resolved {
                target: PathBuf::from("/d/file_2.txt"),
                index: 2,
            }
        );
    }

    #[test]
    fn test_released_then_claimed_is_occupied_again() {
        let probe = SetProbe::of(&["/d/file_1.txt"]);
        let mut claims = TargetClaims::new(&probe);
        claims.release(PathBuf::from("/d/file_1.txt"));
        assert!(!claims.occupied(Path::new("/d/file_1.txt")));
        claims.claim(PathBuf::from("/d/file_1.txt"));
        assert!(claims.occupied(Path::new("/d/file_1.txt")));
    }

    #[test]
    fn test_index_overflow_is_exhaustion_not_a_panic() {
        let top = format!("/d/file_{}.txt", u32::MAX);
        let probe = SetProbe::of(&[top.as_str()]);
        let mut claims = TargetClaims::new(&probe);

        let resolution = resolve_indexed(
            &mut claims,
            Path::new("/d/src.txt"),
            Path::new("/d"),
            u32::MAX,
            10,
            false,
            name,
        );
        // Only one index is representable from here; no wrap-around.
        assert_eq!(resolution, Resolution::Exhausted { attempts: 1 });
    }

    #[test]
    fn test_single_claim_try_claim() {
        let probe = SetProbe::of(&["/d/a.webp"]);
        let mut claims = TargetClaims::new(&probe);
        assert!(!claims.try_claim(Path::new("/d/a.png"), Path::new("/d/a.webp"), false));
        assert!(claims.try_claim(Path::new("/d/a.png"), Path::new("/d/a.webp"), true));
        assert!(claims.try_claim(Path::new("/d/b.png"), Path::new("/d/b.webp"), false));
        // Claimed within the batch, so a later file cannot take it.
        assert!(!claims.try_claim(Path::new("/d/c.png"), Path::new("/d/b.webp"), false));
    }
}
