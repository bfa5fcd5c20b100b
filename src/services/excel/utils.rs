use calamine::{Data, Range};
use chrono::{Duration, NaiveDate, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use super::layout::{EXCLUDED_SHEET, SHEET_NAME_MARKER};

static CELL_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)([1-9][0-9]*)$").expect("valid cell reference pattern"));

/// True for sheets that follow the work order naming convention. The
/// copy/paste template sheet matches the marker but never holds data.
pub fn is_work_order_sheet(name: &str) -> bool {
    name.contains(SHEET_NAME_MARKER) && name != EXCLUDED_SHEET
}

/// Number of SKU blocks advertised by the sheet name ("3 SKU Layout" -> 3,
/// "1 SKU" -> 1). Names that do not lead with a count fall back to a single
/// block.
pub fn sku_count_from_name(name: &str) -> u32 {
    name.split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .unwrap_or(1)
}

/// Parse an A1-style cell reference into a 0-based (row, column) pair.
pub fn parse_cell_ref(addr: &str) -> Option<(u32, u32)> {
    let caps = CELL_REF.captures(addr)?;
    let col = column_index(caps.get(1)?.as_str())?;
    let row: u32 = caps.get(2)?.as_str().parse().ok()?;
    Some((row - 1, col))
}

/// 0-based column index for a letter run (A=0, Z=25, AA=26).
pub fn column_index(letters: &str) -> Option<u32> {
    let mut index: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as u32;
        index = index.checked_mul(26)?.checked_add(digit + 1)?;
    }
    index.checked_sub(1)
}

/// Read a cell by A1 reference, coerced to a trimmed string. Malformed
/// references, positions outside the range, and empty cells all resolve to
/// the empty string.
pub fn cell_value(range: &Range<Data>, addr: &str) -> String {
    let Some(pos) = parse_cell_ref(addr) else {
        return String::new();
    };
    match range.get_value(pos) {
        Some(data) => data_to_string(data),
        None => String::new(),
    }
}

fn data_to_string(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::DateTime(dt) => excel_datetime_string(dt.as_f64()),
        other => other.to_string().trim().to_string(),
    }
}

/// Render an Excel serial date (days since 1899-12-30) as a readable
/// timestamp. Midnight values print as a bare date.
fn excel_datetime_string(serial: f64) -> String {
    let epoch = match NaiveDate::from_ymd_opt(1899, 12, 30).and_then(|d| d.and_hms_opt(0, 0, 0)) {
        Some(dt) => dt,
        None => return String::new(),
    };
    let seconds = (serial * 86400.0).round() as i64;
    let stamp = match epoch.checked_add_signed(Duration::seconds(seconds)) {
        Some(dt) => dt,
        None => return String::new(),
    };
    if stamp.num_seconds_from_midnight() == 0 {
        stamp.format("%Y-%m-%d").to_string()
    } else {
        stamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
