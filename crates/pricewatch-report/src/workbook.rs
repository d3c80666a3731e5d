//! Spreadsheet serialization and styling.
//!
//! One run produces one workbook: a `Raw_Data` sheet with every record field
//! and a `price_change_summary` sheet restricted to the comparison columns.
//! After the rows are written, a styling pass colors the summary change
//! column by sign and sizes every column to its longest rendered value.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use pricewatch_core::PriceRecord;

use crate::error::ReportError;

const RAW_SHEET: &str = "Raw_Data";
const SUMMARY_SHEET: &str = "price_change_summary";

/// Classic spreadsheet "good"/"bad" fills.
const GREEN_FILL: Color = Color::RGB(0x00C6_EFCE);
const RED_FILL: Color = Color::RGB(0x00FF_C7CE);

/// Extra characters added to every auto-sized column.
const WIDTH_MARGIN: f64 = 2.0;

/// Writes the two-sheet report and returns the path of the created file.
///
/// Creates `report_dir` if absent. The file name embeds `now` as
/// `price_summary_<YYYYMMDD_HHMM>.xlsx` so consecutive runs never overwrite
/// each other. Values are written exactly as held in memory: strings as
/// strings, prices as numbers, absent values as blank cells.
///
/// # Errors
///
/// - [`ReportError::NoRecords`] — `records` is empty; no file is created.
/// - [`ReportError::ReportDirIo`] — the report directory cannot be created.
/// - [`ReportError::Xlsx`] — the workbook cannot be written or saved.
pub fn write_report(
    records: &[PriceRecord],
    report_dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    if records.is_empty() {
        return Err(ReportError::NoRecords);
    }

    std::fs::create_dir_all(report_dir).map_err(|e| ReportError::ReportDirIo {
        path: report_dir.display().to_string(),
        source: e,
    })?;
    let path = report_dir.join(report_filename(now));

    let mut workbook = Workbook::new();
    write_raw_sheet(workbook.add_worksheet(), records)?;
    write_summary_sheet(workbook.add_worksheet(), records)?;
    workbook.save(&path)?;

    tracing::info!(path = %path.display(), rows = records.len(), "report written");
    Ok(path)
}

/// File name for a run at the given instant: `price_summary_YYYYMMDD_HHMM.xlsx`.
fn report_filename(now: DateTime<Utc>) -> String {
    format!("price_summary_{}.xlsx", now.format("%Y%m%d_%H%M"))
}

fn write_raw_sheet(worksheet: &mut Worksheet, records: &[PriceRecord]) -> Result<(), ReportError> {
    worksheet.set_name(RAW_SHEET)?;
    let mut widths = ColumnWidths::new();
    let header = Format::new().set_bold();

    let headers = [
        "product_name",
        "competitor",
        "raw_price",
        "availability",
        "timestamp",
        "price",
        "previous_price",
        "price_change",
    ];
    for (col, name) in headers.iter().enumerate() {
        let col = to_col(col);
        widths.note(col, name);
        worksheet.write_string_with_format(0, col, *name, &header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = to_row(idx + 1);
        let timestamp = record.timestamp.to_rfc3339();

        write_string(worksheet, &mut widths, row, 0, &record.product_name)?;
        write_string(worksheet, &mut widths, row, 1, &record.competitor)?;
        write_string(worksheet, &mut widths, row, 2, &record.raw_price)?;
        write_string(worksheet, &mut widths, row, 3, &record.availability)?;
        write_string(worksheet, &mut widths, row, 4, &timestamp)?;
        write_opt_number(worksheet, &mut widths, row, 5, record.price, None)?;
        write_opt_number(worksheet, &mut widths, row, 6, record.previous_price, None)?;
        write_opt_number(worksheet, &mut widths, row, 7, record.price_change, None)?;
    }

    widths.apply(worksheet)?;
    Ok(())
}

fn write_summary_sheet(
    worksheet: &mut Worksheet,
    records: &[PriceRecord],
) -> Result<(), ReportError> {
    worksheet.set_name(SUMMARY_SHEET)?;
    let mut widths = ColumnWidths::new();
    let header = Format::new().set_bold();
    let green = Format::new().set_background_color(GREEN_FILL);
    let red = Format::new().set_background_color(RED_FILL);

    let headers = [
        "product_name",
        "competitor",
        "previous_price",
        "price",
        "price_change",
    ];
    for (col, name) in headers.iter().enumerate() {
        let col = to_col(col);
        widths.note(col, name);
        worksheet.write_string_with_format(0, col, *name, &header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = to_row(idx + 1);

        write_string(worksheet, &mut widths, row, 0, &record.product_name)?;
        write_string(worksheet, &mut widths, row, 1, &record.competitor)?;
        write_opt_number(worksheet, &mut widths, row, 2, record.previous_price, None)?;
        write_opt_number(worksheet, &mut widths, row, 3, record.price, None)?;

        // A drop reads as good news (green), a rise as bad (red); zero and
        // absent stay unstyled.
        let fill = match record.price_change {
            Some(change) if change > 0.0 => Some(&red),
            Some(change) if change < 0.0 => Some(&green),
            _ => None,
        };
        write_opt_number(worksheet, &mut widths, row, 4, record.price_change, fill)?;
    }

    widths.apply(worksheet)?;
    Ok(())
}

fn write_string(
    worksheet: &mut Worksheet,
    widths: &mut ColumnWidths,
    row: u32,
    col: u16,
    value: &str,
) -> Result<(), ReportError> {
    widths.note(col, value);
    worksheet.write_string(row, col, value)?;
    Ok(())
}

/// Writes a number when present, leaves the cell blank otherwise.
fn write_opt_number(
    worksheet: &mut Worksheet,
    widths: &mut ColumnWidths,
    row: u32,
    col: u16,
    value: Option<f64>,
    format: Option<&Format>,
) -> Result<(), ReportError> {
    let Some(number) = value else {
        return Ok(());
    };
    widths.note(col, &number.to_string());
    match format {
        Some(format) => worksheet.write_number_with_format(row, col, number, format)?,
        None => worksheet.write_number(row, col, number)?,
    };
    Ok(())
}

/// Longest rendered value per column, for the auto-sizing pass.
struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    fn new() -> Self {
        Self { widths: Vec::new() }
    }

    fn note(&mut self, col: u16, rendered: &str) {
        let col = usize::from(col);
        if col >= self.widths.len() {
            self.widths.resize(col + 1, 0);
        }
        self.widths[col] = self.widths[col].max(rendered.chars().count());
    }

    fn apply(&self, worksheet: &mut Worksheet) -> Result<(), ReportError> {
        for (col, width) in self.widths.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            worksheet.set_column_width(to_col(col), *width as f64 + WIDTH_MARGIN)?;
        }
        Ok(())
    }
}

fn to_row(idx: usize) -> u32 {
    u32::try_from(idx).unwrap_or(u32::MAX)
}

fn to_col(idx: usize) -> u16 {
    u16::try_from(idx).unwrap_or(u16::MAX)
}
