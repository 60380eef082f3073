use anyhow::{Context, Result};
use clap::Parser;
use filemate_core::{Config, OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod change_ext;
mod cli;
mod render;
mod rename;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    // Load defaults from .filemate/config.toml if present
    let config = Config::load().unwrap_or_default();

    let result = run(cli, &config, use_color);
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    match cli.command {
        Commands::Rename {
            folder,
            pattern,
            ext,
            prefix,
            start,
            output_dir,
            force,
            dry_run,
            output,
            quiet,
        } => rename::handle_rename(
            folder, pattern, ext, prefix, start, output_dir, force, dry_run, output, quiet,
            config, use_color,
        ),

        Commands::ChangeExt {
            folder,
            to,
            from,
            prefix,
            output_dir,
            yes,
            force,
            dry_run,
            output,
            quiet,
        } => change_ext::handle_change_ext(
            folder, to, from, prefix, output_dir, yes, force, dry_run, output, quiet, config,
            use_color,
        ),

        Commands::Version { output } => {
            let result = VersionResult {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            println!("{}", result.format(output.into()));
            Ok(())
        },
    }
}
