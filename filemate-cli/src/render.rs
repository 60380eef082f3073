use filemate_core::{Outcome, OutcomeStatus};
use nu_ansi_term::Color;
use std::io::{self, BufRead, Write};

fn paint(color: Color, text: &str, use_color: bool) -> String {
    if use_color {
        color.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Print one progress line per outcome, in processing order.
pub fn print_outcomes(outcomes: &[Outcome], use_color: bool) {
    for outcome in outcomes {
        let source = outcome.source_name();
        let target = outcome.target_name();
        let detail = outcome.detail.as_deref().unwrap_or_default();
        match outcome.status {
            OutcomeStatus::Renamed => {
                println!("{} {source} -> {target}", paint(Color::Green, "Renamed:", use_color));
            },
            OutcomeStatus::Moved => {
                println!("{} {source} -> {target}", paint(Color::Green, "Moved:", use_color));
            },
            OutcomeStatus::DryRun => {
                println!("{} {source} -> {target}", paint(Color::Yellow, "[dry run]", use_color));
            },
            OutcomeStatus::SkippedConflict => {
                println!(
                    "{} {source} ({detail})",
                    paint(Color::Yellow, "Skipped (target exists):", use_color)
                );
            },
            OutcomeStatus::SkippedPermission => {
                println!(
                    "{} {source} ({detail})",
                    paint(Color::Red, "Permission denied (skipped):", use_color)
                );
            },
            OutcomeStatus::SkippedOther => {
                println!(
                    "{} {source} ({detail})",
                    paint(Color::Red, "Error (skipped):", use_color)
                );
            },
            OutcomeStatus::SkippedSymlink => {
                println!(
                    "{} {source}",
                    paint(Color::DarkGray, "Skipping symbolic link:", use_color)
                );
            },
        }
    }
}

/// Ask the user to confirm a live run. EOF or anything that is not a
/// `y`/`yes` counts as a decline.
pub fn confirm(question: &str) -> bool {
    print!("{question} [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
