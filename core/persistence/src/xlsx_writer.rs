//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::{PersistenceError, SavedCellValue, Workbook};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};
use std::path::Path;
use tiang_engine::RUPIAH_NUM_FORMAT;

pub fn save_xlsx(workbook: &Workbook, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let header_format = Format::new().set_bold();
    let currency_format = Format::new().set_num_format(RUPIAH_NUM_FORMAT);

    for sheet in &workbook.sheets {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, width) in &sheet.column_widths {
            worksheet.set_column_width(*col, *width)?;
        }

        // Header row
        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }
        if !sheet.headers.is_empty() {
            worksheet.set_freeze_panes(1, 0)?;
        }

        // Data rows start below the header
        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let row_num = row_idx as u32 + 1;
            for (col, value) in row.iter().enumerate() {
                let col = col as u16;
                match value {
                    SavedCellValue::Empty => {}
                    SavedCellValue::Number(n) => {
                        worksheet.write_number(row_num, col, *n)?;
                    }
                    SavedCellValue::Currency(n) => {
                        worksheet.write_number_with_format(row_num, col, *n, &currency_format)?;
                    }
                    SavedCellValue::Text(s) => {
                        worksheet.write_string(row_num, col, s)?;
                    }
                    SavedCellValue::Boolean(b) => {
                        worksheet.write_boolean(row_num, col, *b)?;
                    }
                }
            }
        }
    }

    xlsx.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_export, read_rows, Sheet};
    use tiang_engine::Project;

    #[test]
    fn test_written_sheet_reads_back_as_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        let mut sheet = Sheet::new("Data", &["Label", "Sudut (derajat)"]);
        sheet.push_row(vec![
            SavedCellValue::Text("A1".to_string()),
            SavedCellValue::Number(20.0),
        ]);
        sheet.push_row(vec![SavedCellValue::Text("A2".to_string()), SavedCellValue::Empty]);
        let workbook = Workbook { sheets: vec![sheet] };

        save_xlsx(&workbook, &path).unwrap();
        let rows = read_rows(&path).unwrap();

        assert_eq!(rows.len(), 2);
        let angle = rows[0]
            .iter()
            .find(|(h, _)| *h == "Sudut (derajat)")
            .map(|(_, v)| v.as_number());
        assert_eq!(angle, Some(20.0));
        assert_eq!(rows[1].iter().count(), 1);
    }

    #[test]
    fn test_full_export_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rab.xlsx");

        let mut project = Project::default();
        project.add_pole_angle(10.0);
        project.add_pole_angle(20.0);
        save_xlsx(&build_export(&project), &path).unwrap();

        // The first sheet is the pole detail sheet
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(path.metadata().unwrap().len() > 0);
    }
}
