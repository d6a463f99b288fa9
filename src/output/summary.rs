use std::fmt::Write;

use comfy_table::{Cell, CellAlignment, Color as TableColor};

use crate::error::CrmLensError;
use crate::insights::DealInsights;
use crate::scheduler::RefreshTick;

use super::styling::{bright, bright_green, bright_red, bright_yellow, cyan, dim};
use super::tables::{amount_bar, create_table, cyan_header};

const BAR_WIDTH: usize = 30;

/// Prints the sales dashboard for one refresh to stdout.
///
/// Sections:
/// - Overview: deal count, pipeline value, average deal size
/// - Pipeline by Stage: per-stage totals with a proportional bar
/// - Deal List: the four raw columns for every fetched deal
pub fn print_dashboard(insights: &DealInsights) {
    println!("{}", render_dashboard(insights));
}

/// Stamp shown before the rest of the output in watch mode.
pub fn print_refresh_tick(tick: &RefreshTick) {
    println!("{} {}", dim("Last refreshed:"), cyan(tick.to_display()));
}

/// Zero records is a distinct user-visible state, not an error.
pub fn print_empty_warning() {
    println!(
        "{}",
        bright_yellow("⚠ Connected to Zoho CRM, but no deals were found")
    );
}

/// A failed run produces this single line and nothing else.
pub fn print_run_error(error: &CrmLensError) {
    eprintln!("{}", bright_red(format!("✖ Connection error: {error}")));
}

/// Currency with two decimal places and thousands separators.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

fn add_section_header(output: &mut String, emoji: &str, title: &str) {
    let _ = writeln!(output, "{} {}", bright(emoji), bright(title).underlined());
}

fn render_dashboard(insights: &DealInsights) -> String {
    let mut output = String::new();

    // Overview section
    add_section_header(&mut output, "📊", "Overview");

    let avg_display = match insights.avg_deal_size {
        Some(avg) => bright_green(format_currency(avg)),
        None => dim("N/A"),
    };

    let _ = writeln!(
        output,
        "  {} {}\n  {} {}\n  {} {}\n",
        dim("Total deals:"),
        bright_yellow(insights.total_deals),
        dim("Pipeline value:"),
        bright_green(format_currency(insights.pipeline_value)),
        dim("Avg deal size:"),
        avg_display,
    );

    // Stage chart section
    add_section_header(&mut output, "📶", "Pipeline by Stage");

    let max_amount = insights
        .stages
        .iter()
        .map(|stage| stage.total_amount)
        .fold(0.0_f64, f64::max);

    let mut stage_table = create_table();
    stage_table.set_header(cyan_header(&["Stage", "Total Amount", ""]));
    for aggregate in &insights.stages {
        stage_table.add_row(vec![
            Cell::new(&aggregate.stage),
            Cell::new(format_currency(aggregate.total_amount))
                .set_alignment(CellAlignment::Right),
            Cell::new(amount_bar(aggregate.total_amount, max_amount, BAR_WIDTH))
                .fg(TableColor::Blue),
        ]);
    }
    let _ = writeln!(output, "{stage_table}\n");

    // Detail table section
    add_section_header(&mut output, "📋", "Deal List");

    let mut deal_table = create_table();
    deal_table.set_header(cyan_header(&[
        "Deal Name",
        "Amount",
        "Stage",
        "Closing Date",
    ]));
    for deal in &insights.deals {
        deal_table.add_row(vec![
            Cell::new(&deal.deal_name),
            Cell::new(format_currency(deal.amount)).set_alignment(CellAlignment::Right),
            Cell::new(&deal.stage),
            Cell::new(&deal.closing_date),
        ]);
    }
    let _ = writeln!(output, "{deal_table}");

    output
}
