//! FILENAME: core/engine/src/currency.rs
//! PURPOSE: Integer rupiah formatting (id-ID locale style).
//! CONTEXT: Amounts render as `Rp 11.400.000`: rounded to whole rupiah,
//! `.` between thousands, no fractional part.

/// Spreadsheet number format producing the same rendering as `format_rupiah`.
pub const RUPIAH_NUM_FORMAT: &str = "\"Rp \"#,##0";

pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp -".to_string();
    }

    let rounded = amount.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));

    if rounded < 0.0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Insert `.` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }

    result
}
