// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::GuestRow;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Leading column is the row index.
const HEADERS: [&str; 3] = ["", "guestID", "chat_id"];

/// Guest tracking sheet with styled header, banded rows and auto column widths.
pub(crate) fn export_guest_rows(rows: &[GuestRow], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (index, row) in rows.iter().enumerate() {
        let r = (index + 1) as u32;
        let band = if index % 2 == 0 { band1 } else { band2 };

        write_number(worksheet, r, 0, index as f64, band)?;
        write_text(worksheet, r, 1, &row.guest_id, band)?;
        write_number(worksheet, r, 2, row.chat_id as f64, band)?;

        col_widths[0] = col_widths[0].max(index.to_string().len());
        col_widths[1] = col_widths[1].max(UnicodeWidthStr::width(row.guest_id.as_str()));
        col_widths[2] = col_widths[2].max(row.chat_id.to_string().len());
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::Spreadsheet(format!("invalid path {}", path.display())))?;
    workbook.save(path_str)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_number(ws: &mut Worksheet, row: u32, col: u16, value: f64, bg: Color) -> AppResult<()> {
    let fmt = Format::new()
        .set_align(FormatAlign::Right)
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    ws.write_with_format(row, col, value, &fmt)?;
    Ok(())
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, value: &str, bg: Color) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    ws.write_with_format(row, col, value, &fmt)?;
    Ok(())
}
