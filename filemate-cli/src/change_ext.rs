use crate::cli::OutputFormatArg;
use crate::render::{confirm, print_outcomes};
use anyhow::Result;
use filemate_core::{
    change_ext_operation, render_batch_table, ChangeExtConfig, Config, ExtensionFilter,
    OutcomeStatus, OutputFormat, OutputFormatter,
};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_change_ext(
    folder: PathBuf,
    to: String,
    from: Option<String>,
    prefix: Option<String>,
    output_dir: Option<PathBuf>,
    yes: bool,
    force: bool,
    dry_run: bool,
    output: Option<OutputFormatArg>,
    quiet: bool,
    defaults: &Config,
    use_color: bool,
) -> Result<()> {
    let mut config = ChangeExtConfig::new(folder, to);
    config.from_extensions = from.as_deref().map(ExtensionFilter::parse).transpose()?;
    config.prefix = prefix;
    config.output_dir = output_dir;
    config.force = force;
    config.dry_run = dry_run;

    let format: OutputFormat = output
        .unwrap_or_else(|| OutputFormatArg::from_config(&defaults.defaults.output))
        .into();

    if !dry_run && !yes && !prompt_for_confirmation(&config)? {
        println!("Operation cancelled by user.");
        return Ok(());
    }

    let report = change_ext_operation(&config)?;

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

/// Show the first few proposed changes, then ask before mutating
/// anything. The preview is a real dry-run pass, so the names shown are
/// exactly what a live run would produce.
fn prompt_for_confirmation(config: &ChangeExtConfig) -> Result<bool> {
    let mut preview_config = config.clone();
    preview_config.dry_run = true;
    let preview = change_ext_operation(&preview_config)?;

    let proposed: Vec<_> = preview
        .batch
        .outcomes
        .iter()
        .filter(|o| o.status == OutcomeStatus::DryRun)
        .collect();
    if proposed.is_empty() {
        // Nothing would change; no need to ask.
        return Ok(true);
    }

    println!("--- Proposed Changes ---");
    for outcome in proposed.iter().take(5) {
        println!("- {} -> {}", outcome.source_name(), outcome.target_name());
    }
    if proposed.len() > 5 {
        println!("- ... and {} more file(s)", proposed.len() - 5);
    }
    println!(
        "\nAbout to change extension to '{}' for {} file(s) in '{}'.",
        preview.to_extension,
        proposed.len(),
        config.folder.display()
    );
    if config.force {
        println!("--force specified: existing target files WILL be overwritten!");
    }
    Ok(confirm("Proceed with changing extensions?"))
}
