use crate::output::{BatchResult, OutcomeStatus};
use comfy_table::{Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use std::io::{self, IsTerminal};

/// Render a batch as a table: one row per outcome, in processing order.
pub fn render_batch_table(batch: &BatchResult, use_color: bool) -> String {
    let mut table = Table::new();

    // Fixed layout off-TTY keeps test output deterministic.
    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_constraints(vec![
            ColumnConstraint::Absolute(Width::Fixed(40)), // Source
            ColumnConstraint::Absolute(Width::Fixed(40)), // Target
            ColumnConstraint::Absolute(Width::Fixed(22)), // Status
        ]);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Source").fg(Color::Cyan),
            Cell::new("Target").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Source", "Target", "Status"]);
    }

    for outcome in &batch.outcomes {
        let status = outcome.status.to_string();
        if use_color {
            table.add_row(vec![
                Cell::new(outcome.source_name()),
                Cell::new(outcome.target_name()).fg(Color::Magenta),
                Cell::new(status).fg(status_color(outcome.status)),
            ]);
        } else {
            table.add_row(vec![outcome.source_name(), outcome.target_name(), status]);
        }
    }

    table.to_string()
}

fn status_color(status: OutcomeStatus) -> Color {
    match status {
        OutcomeStatus::Renamed | OutcomeStatus::Moved => Color::Green,
        OutcomeStatus::DryRun => Color::Yellow,
        OutcomeStatus::SkippedSymlink => Color::DarkGrey,
        _ => Color::Red,
    }
}
