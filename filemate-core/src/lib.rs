#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod conflict;
pub mod operations;
pub mod output;
pub mod pattern;
pub mod preview;
pub mod scanner;

pub use apply::execute;
pub use config::{
    ChangeExtConfig, Config, ConfigError, DefaultsConfig, ExtensionFilter, RenameConfig,
    DEFAULT_PATTERN, DEFAULT_START, MAX_CONFLICT_ATTEMPTS,
};
pub use conflict::{resolve_indexed, FsProbe, PathProbe, Resolution, TargetClaims};
pub use operations::{
    change_ext_operation, change_ext_operation_with_probe, rename_operation,
    rename_operation_with_probe,
};
pub use output::{
    BatchResult, BatchSummary, ChangeExtReport, Outcome, OutcomeStatus, OutputFormat,
    OutputFormatter, RenameReport, VersionResult,
};
pub use pattern::NamePattern;
pub use preview::render_batch_table;
pub use scanner::{scan_directory, CandidateSet, FileEntry, ScanFilter};
