//! FILENAME: core/engine/src/classifier.rs
//! PURPOSE: Maps a pole tilt angle (sudut) to its category.
//! CONTEXT: The classifier is total. Out-of-domain input (negative, NaN,
//! fractional gaps between the integer thresholds) falls back to TM1.

use crate::category::Category;

/// Classify a pole by its tilt angle in degrees.
///
/// Precedence is fixed: `<= 15` is TM1, `16..=45` is TM2, `>= 46` is TM10,
/// and anything else (negative, NaN, 15.5, 45.5) is TM1.
pub fn classify(angle_degrees: f64) -> Category {
    if angle_degrees <= 15.0 {
        return Category::TM1;
    }
    if (16.0..=45.0).contains(&angle_degrees) {
        return Category::TM2;
    }
    if angle_degrees >= 46.0 {
        return Category::TM10;
    }
    Category::TM1
}

/// Parse the numeric prefix of `text` the way a spreadsheet `parseFloat`
/// does: leading whitespace is skipped, trailing garbage is ignored.
/// Returns NaN when no number can be read.
pub fn parse_lenient(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let candidate: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();

    for end in (1..=candidate.len()).rev() {
        if let Ok(value) = candidate[..end].parse::<f64>() {
            return value;
        }
    }
    f64::NAN
}

/// Parse the manual angle input field.
/// Empty or non-numeric input returns `None` and the caller does nothing.
pub fn parse_angle_input(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    let value = parse_lenient(text);
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}
