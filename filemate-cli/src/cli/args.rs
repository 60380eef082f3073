use super::types::OutputFormatArg;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "filemate",
    about = "Batch rename files and change file extensions",
    version
)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rename files in a directory using a sequential pattern
    Rename {
        /// Directory containing the files to rename
        folder: PathBuf,

        /// Rename pattern with an {i} index placeholder, e.g. file_{i}
        /// or photo_{i:03}
        #[arg(long)]
        pattern: Option<String>,

        /// Comma-separated extension filter, e.g. jpg,png (dot
        /// optional, case-insensitive)
        #[arg(long, value_name = "EXTS")]
        ext: Option<String>,

        /// Only rename files whose name starts with this prefix
        /// (case-sensitive)
        #[arg(long)]
        prefix: Option<String>,

        /// Starting index (must be at least 1)
        #[arg(long)]
        start: Option<u32>,

        /// Move renamed files into this directory instead of renaming
        /// in place
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Overwrite an existing file at the target name
        #[arg(short = 'f', long)]
        force: bool,

        /// Preview the changes without modifying any files
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(long, value_enum)]
        output: Option<OutputFormatArg>,

        /// Suppress per-file progress lines
        #[arg(short = 'q', long)]
        quiet: bool,
    },

    /// Change the file extension for files in a directory
    ChangeExt {
        /// Directory containing the files to process
        folder: PathBuf,

        /// The target extension, e.g. .txt or txt (leading dot
        /// optional)
        #[arg(long = "to", value_name = "EXT")]
        to: String,

        /// Comma-separated list of source extensions to change, e.g.
        /// .jpg,.jpeg; if omitted, all files are considered
        #[arg(long = "from", value_name = "EXTS")]
        from: Option<String>,

        /// Only process files whose name starts with this prefix
        /// (case-sensitive)
        #[arg(long)]
        prefix: Option<String>,

        /// Move processed files into this directory instead of renaming
        /// in place
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,

        /// Overwrite an existing file at the target name
        #[arg(short = 'f', long)]
        force: bool,

        /// Preview the changes without modifying any files
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(long, value_enum)]
        output: Option<OutputFormatArg>,

        /// Suppress per-file progress lines
        #[arg(short = 'q', long)]
        quiet: bool,
    },

    /// Print version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormatArg,
    },
}
