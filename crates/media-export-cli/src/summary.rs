use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use media_export_model::{Category, CategoryId};

use crate::types::ExportResult;

/// Human-readable report of one export, ready to print.
pub fn render_summary(result: &ExportResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Export: {}", result.filename);
    if let Some(path) = &result.path {
        let _ = writeln!(out, "Output: {}", path.display());
    }
    for (name, value) in &result.headers {
        let _ = writeln!(out, "{name}: {value}");
    }
    let excluded = if result.excluded_categories.is_empty() {
        "none".to_string()
    } else {
        result
            .excluded_categories
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(
        out,
        "Excluded categories: {excluded} (default category: {})",
        result.default_category
    );

    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Media"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Candidates"), Cell::new(stats.candidates)]);
    table.add_row(vec![
        Cell::new("Excluded by own categories"),
        count_cell(stats.excluded_by_own, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Excluded by parent entry"),
        count_cell(stats.excluded_by_parent, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Missing records"),
        count_cell(stats.missing_records, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Skipped by status"),
        count_cell(result.skipped_media, Color::DarkGrey),
    ]);
    table.add_row(vec![
        Cell::new("Rows written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.written).add_attribute(Attribute::Bold),
    ]);
    let _ = writeln!(out, "{table}");
    out
}

/// Category listing rows: id, name, slug, parent, default marker.
///
/// `default_category` is the id the export resolves as the default bucket.
pub fn category_rows(categories: &[Category], default_category: CategoryId) -> Vec<Vec<Cell>> {
    categories
        .iter()
        .map(|category| {
            let is_default = category.id == default_category;
            let name = if is_default {
                Cell::new(&category.name).fg(Color::DarkGrey)
            } else {
                Cell::new(&category.name)
            };
            vec![
                Cell::new(category.id)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                name,
                Cell::new(&category.slug),
                category.parent.map_or_else(|| dim_cell("-"), Cell::new),
                if is_default {
                    Cell::new("✓").fg(Color::Green)
                } else {
                    dim_cell("")
                },
            ]
        })
        .collect()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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
