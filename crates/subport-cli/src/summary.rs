use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use subport_model::{AnalysisReport, ConversionStats, ReportDetail};

use crate::types::{ConversionSummary, RunResult};

/// Columns listed before truncating in summary mode.
pub const COLUMN_PREVIEW: usize = 5;
/// Tags listed before truncating in summary mode.
pub const TAG_PREVIEW: usize = 5;

pub fn print_summary(result: &RunResult, detail: ReportDetail) {
    println!("{}", render_summary(result, detail));
}

pub fn render_summary(result: &RunResult, detail: ReportDetail) -> String {
    let mut sections = vec![format!("Input: {}", result.input.display())];
    sections.push(render_columns(&result.analysis, detail));
    sections.push(render_email_stats(&result.analysis));
    if let Some(tags) = render_tags(&result.analysis, detail) {
        sections.push(tags);
    }
    match &result.conversion {
        Some(conversion) => {
            sections.push(render_conversion(conversion));
            sections.push(render_import_steps(&conversion.output_path));
        }
        None => sections.push("Analyze-only mode: no import file written.".to_string()),
    }
    sections.join("\n\n")
}

fn render_columns(report: &AnalysisReport, detail: ReportDetail) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let shown = visible(report.columns.len(), COLUMN_PREVIEW, detail);
    for (idx, column) in report.columns.iter().take(shown).enumerate() {
        table.add_row(vec![dim_cell(idx + 1), Cell::new(column)]);
    }
    if let Some(row) = more_row(report.columns.len() - shown, "columns") {
        table.add_row(row);
    }
    format!("Found {} columns:\n{table}", report.columns.len())
}

fn render_email_stats(report: &AnalysisReport) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total rows"), Cell::new(report.total_rows)]);
    table.add_row(vec![
        Cell::new("Valid emails"),
        count_cell(report.valid_emails, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Invalid emails"),
        count_cell(report.invalid_emails, Color::Red),
    ]);
    if report.missing_emails > 0 {
        table.add_row(vec![
            dim_cell("  -> missing"),
            dim_cell(report.missing_emails),
        ]);
    }
    table.add_row(vec![
        Cell::new("Unique emails"),
        Cell::new(report.unique_emails),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate emails"),
        count_cell(report.duplicate_emails, Color::Yellow),
    ]);
    if report.duplicated_addresses > 0 {
        table.add_row(vec![
            dim_cell("  -> repeated addresses"),
            dim_cell(report.duplicated_addresses),
        ]);
    }
    format!("Statistics:\n{table}")
}

fn render_tags(report: &AnalysisReport, detail: ReportDetail) -> Option<String> {
    if report.tag_frequency.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tag"), header_cell("Contacts")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let shown = visible(report.unique_tag_count(), TAG_PREVIEW, detail);
    for entry in report.top_tags(shown) {
        table.add_row(vec![Cell::new(&entry.tag), Cell::new(entry.count)]);
    }
    if let Some(row) = more_row(report.unique_tag_count() - shown, "tags") {
        table.add_row(row);
    }
    Some(format!(
        "Tags found ({} unique):\n{table}",
        report.unique_tag_count()
    ))
}

fn render_conversion(summary: &ConversionSummary) -> String {
    let stats: &ConversionStats = &summary.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Result"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Contacts processed"),
        count_cell(stats.processed, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Contacts skipped"),
        count_cell(stats.skipped, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("  -> invalid email"),
        dim_cell(stats.invalid_emails),
    ]);
    table.add_row(vec![
        dim_cell("  -> duplicate email"),
        dim_cell(stats.duplicates),
    ]);
    table.add_row(vec![
        Cell::new("Tags cleaned"),
        Cell::new(stats.tags_cleaned),
    ]);
    let mut text = format!(
        "Conversion complete\nOutput file: {}\nEmail column: {}\n{table}",
        summary.output_path.display(),
        summary.email_column
    );
    if stats.is_empty_result() {
        text.push_str("\nNo contacts were accepted; the import file only has a header row.");
    }
    text
}

fn render_import_steps(output_path: &Path) -> String {
    let file_name = output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_path.display().to_string());
    [
        "Import instructions for ConvertKit:".to_string(),
        "  1. Log into ConvertKit".to_string(),
        "  2. Go to Subscribers -> Import Subscribers".to_string(),
        format!("  3. Upload: {file_name}"),
        "  4. Map columns (should auto-detect)".to_string(),
        "  5. Choose to update existing subscribers if desired".to_string(),
        "  6. Review and confirm import".to_string(),
    ]
    .join("\n")
}

fn visible(total: usize, preview: usize, detail: ReportDetail) -> usize {
    match detail {
        ReportDetail::Full => total,
        ReportDetail::Summary => total.min(preview),
    }
}

fn more_row(hidden: usize, noun: &str) -> Option<Vec<Cell>> {
    if hidden == 0 {
        return None;
    }
    Some(vec![
        dim_cell("..."),
        dim_cell(format!("and {hidden} more {noun}")),
    ])
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
