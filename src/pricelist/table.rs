//! # Table Rendering
//!
//! Renders products as a plain column-aligned table. Widths are measured in
//! terminal columns (`unicode-width`): Cyrillic or accented letters take one
//! column each, CJK ideographs take two, so every row lines up in a terminal.
//!
//! Widths are computed from exactly the rows being rendered, every call. A
//! single-record lookup therefore gets a narrower table than the full list.

use crate::model::Product;
use unicode_width::UnicodeWidthStr;

pub const COLUMNS: usize = 6;

/// Spaces appended after the widest cell of each column.
pub const COLUMN_GAP: usize = 2;

pub const HEADER: [&str; COLUMNS] = ["Code", "Name", "Type", "Base price", "Discount", "Price"];

pub type Row = [String; COLUMNS];

/// Two decimal places, as every money and percent column is shown.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn header_row() -> Row {
    HEADER.map(str::to_string)
}

pub fn product_row(product: &Product) -> Row {
    [
        product.code().to_string(),
        product.name.clone(),
        product.kind.clone(),
        format_amount(product.base_price()),
        format_amount(product.discount()),
        format_amount(product.sale_price()),
    ]
}

pub fn column_widths(rows: &[Row]) -> [usize; COLUMNS] {
    let mut widths = [0; COLUMNS];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

/// Pads every cell to its column width plus [`COLUMN_GAP`] and joins the rows
/// with `\n`. Trailing padding on the last column is kept.
pub fn render_rows(rows: &[Row]) -> String {
    let widths = column_widths(rows);
    let mut out = String::new();
    for row in rows {
        for (cell, width) in row.iter().zip(widths) {
            out.push_str(cell);
            let pad = width - cell.width() + COLUMN_GAP;
            out.push_str(&" ".repeat(pad));
        }
        out.push('\n');
    }
    out
}

/// Header plus one row per product. With no products this is the header alone.
pub fn render_table(products: &[Product]) -> String {
    let mut rows = Vec::with_capacity(products.len() + 1);
    rows.push(header_row());
    rows.extend(products.iter().map(product_row));
    render_rows(&rows)
}
