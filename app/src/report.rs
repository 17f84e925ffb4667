//! FILENAME: app/src/report.rs
// PURPOSE: Plain-text and JSON rendering of a report.

use crate::api_types::{PoleData, RabSummary, ReportData};
use std::fmt::Write;
use tiang_engine::{format_rupiah, Category};

fn format_angle(angle: f64) -> String {
    if angle.fract() == 0.0 {
        format!("{:.0}", angle)
    } else {
        format!("{}", angle)
    }
}

fn render_poles(out: &mut String, poles: &[PoleData]) {
    let _ = writeln!(out, "DATA TIANG ({} tiang)", poles.len());
    if poles.is_empty() {
        let _ = writeln!(out, "  (belum ada tiang)");
        return;
    }
    let _ = writeln!(
        out,
        "  {:>3}  {:<16} {:>8}  {:<5} {:<6} {}",
        "No", "Label", "Sudut", "Kat.", "Posisi", "Sumber"
    );
    for pole in poles {
        let _ = writeln!(
            out,
            "  {:>3}  {:<16} {:>8}  {:<5} {:<6} {}",
            pole.number,
            pole.label,
            format_angle(pole.angle_degrees),
            pole.category.as_str(),
            pole.position,
            pole.source
        );
    }
}

fn render_summary(out: &mut String, summary: &RabSummary) {
    let _ = writeln!(out, "KLASIFIKASI (awal: {})", summary.starting_category);
    for category in Category::ALL {
        let count = summary.counts.get(&category).copied().unwrap_or(0);
        let _ = writeln!(out, "  {:<5} {}", category.as_str(), count);
    }

    let _ = writeln!(out, "RAB");
    if summary.rows.is_empty() {
        let _ = writeln!(out, "  (tidak ada item)");
    }
    for (category, row) in &summary.rows {
        let _ = writeln!(
            out,
            "  {:<5} x{:<3} material {:>16}  tukang {:>14}  alat {:>14}  total {:>16}",
            category.as_str(),
            row.count,
            format_rupiah(row.material),
            format_rupiah(row.labor),
            format_rupiah(row.equipment),
            format_rupiah(row.total)
        );
    }
    let _ = writeln!(out, "GRAND TOTAL: {}", summary.grand_total_display);
}

/// Human-readable report.
pub fn render_text(report: &ReportData) -> String {
    let mut out = String::new();
    if let Some(name) = &report.poles_file {
        let _ = writeln!(out, "File tiang: {}", name);
    }
    if let Some(name) = &report.prices_file {
        let _ = writeln!(out, "File harga: {}", name);
    }
    render_poles(&mut out, &report.poles);
    out.push('\n');
    render_summary(&mut out, &report.summary);
    out
}

pub fn render_json(report: &ReportData) -> Result<String, String> {
    serde_json::to_string_pretty(report).map_err(|e| e.to_string())
}
