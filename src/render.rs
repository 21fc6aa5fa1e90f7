use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use configuration::Display;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary value with the configured symbol, thousands separators,
/// and decimal places.
pub fn money(value: Decimal, display: &Display) -> String {
    let places = display.decimal_places as usize;
    let rounded = value
        .abs()
        .round_dp_with_strategy(display.decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{rounded:.places$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{}{grouped}.{frac}", display.currency_symbol),
        None => format!("{sign}{}{grouped}", display.currency_symbol),
    }
}

/// A table with the house style: full UTF-8 borders, dynamic widths.
pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    table
}

/// A right-aligned cell, for numeric columns.
pub fn num_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}
