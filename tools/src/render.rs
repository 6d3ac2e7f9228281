//! Tabular rendering of cleaned rows and report results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use salesmart_core::record::{CleanRecord, COLUMNS};
use salesmart_core::report::Report;

/// Columns rendered right-aligned wherever they appear.
const NUMERIC_COLUMNS: [&str; 5] = ["total_orders", "sales", "order_total", "quantity", "price"];

pub fn print_cleaned_preview(records: &[CleanRecord], limit: usize) {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(COLUMNS.iter().map(|c| header_cell(c)).collect::<Vec<_>>());
    for record in records.iter().take(limit) {
        let raw = record.to_raw();
        table.add_row(
            raw.fields()
                .iter()
                .map(|(_, value)| value.to_string())
                .collect::<Vec<_>>(),
        );
    }
    align_numeric_columns(&mut table, &COLUMNS);
    println!(
        "Cleaned data (first {} of {} rows):",
        records.len().min(limit),
        records.len()
    );
    println!("{table}");
    println!();
}

pub fn print_report(report: &Report) {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(
        report
            .headers
            .iter()
            .map(|h| header_cell(h))
            .collect::<Vec<_>>(),
    );
    for row in &report.rows {
        table.add_row(row.clone());
    }
    align_numeric_columns(&mut table, &report.headers);
    println!("{}:", report.title);
    if report.rows.is_empty() {
        println!("  (no rows)");
    } else {
        println!("{table}");
    }
    println!();
}

fn apply_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_numeric_columns(table: &mut Table, headers: &[&str]) {
    for (idx, header) in headers.iter().enumerate() {
        if NUMERIC_COLUMNS.contains(header) {
            if let Some(column) = table.column_mut(idx) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
}
