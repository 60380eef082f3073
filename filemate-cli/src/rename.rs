use crate::cli::OutputFormatArg;
use crate::render::print_outcomes;
use anyhow::Result;
use filemate_core::{
    rename_operation, render_batch_table, Config, ExtensionFilter, OutputFormat, OutputFormatter,
    RenameConfig,
};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_rename(
    folder: PathBuf,
    pattern: Option<String>,
    ext: Option<String>,
    prefix: Option<String>,
    start: Option<u32>,
    output_dir: Option<PathBuf>,
    force: bool,
    dry_run: bool,
    output: Option<OutputFormatArg>,
    quiet: bool,
    defaults: &Config,
    use_color: bool,
) -> Result<()> {
    let mut config = RenameConfig::new(folder);
    config.pattern = pattern.unwrap_or_else(|| defaults.defaults.pattern.clone());
    config.start = start.unwrap_or(defaults.defaults.start);
    config.extensions = ext.as_deref().map(ExtensionFilter::parse).transpose()?;
    config.prefix = prefix;
    config.output_dir = output_dir;
    config.force = force;
    config.dry_run = dry_run;

    let format: OutputFormat = output
        .unwrap_or_else(|| OutputFormatArg::from_config(&defaults.defaults.output))
        .into();
    let report = rename_operation(&config)?;

    if format == OutputFormat::Json {
        println!("{}", report.format_json());
        return Ok(());
    }

    if !quiet {
        if dry_run {
            println!("{}", render_batch_table(&report.batch, use_color));
        } else {
            print_outcomes(&report.batch.outcomes, use_color);
        }
    }
    println!();
    print!("{}", report.format_summary());
    Ok(())
}
