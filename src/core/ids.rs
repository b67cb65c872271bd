//! Chat id lists on disk, so a sample can be drawn once and reported later.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;
use zip::ZipArchive;

/// Header names that mark the id column, in order of preference.
const ID_HEADERS: [&str; 2] = ["id", "chat_id"];

const FIRST_SHEET: &str = "xl/worksheets/sheet1.xml";
const SHARED_STRINGS: &str = "xl/sharedStrings.xml";

static SHARED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<si>(.*?)</si>").expect("valid shared string regex"));
static TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<t(?:\s[^>]*)?>(.*?)</t>").expect("valid text regex"));
static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<row\b[^>]*>(.*?)</row>").expect("valid row regex"));
static CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<c\b([^>]*?)(?:/>|>(.*?)</c>)"#).expect("valid cell regex")
});
static REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\br="([A-Z]+)\d+""#).expect("valid cell ref regex"));
static TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bt="(\w+)""#).expect("valid cell type regex"));
static VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<v>(.*?)</v>").expect("valid value regex"));

/// Read chat ids from a CSV file, a one-id-per-line file or the first sheet
/// of an `.xlsx` workbook (such as a chat-history export or a guest sheet
/// written by `report`).
///
/// A first row with a non-numeric cell is a header: the column named `id`
/// (or `chat_id`) is used when present, otherwise the first column. Blank
/// lines are ignored.
pub fn read_ids(path: &Path) -> AppResult<Vec<i64>> {
    let rows = if is_workbook(path) {
        read_sheet_rows(path)?
    } else {
        read_csv_rows(path)?
    };

    let mut column = 0;
    let mut ids = Vec::new();

    for (line, row) in rows.iter().enumerate() {
        if line == 0 && is_header(row) {
            column = ID_HEADERS
                .iter()
                .find_map(|name| row.iter().position(|h| h.eq_ignore_ascii_case(name)))
                .unwrap_or(0);
            continue;
        }

        let value = row.get(column).map(String::as_str).unwrap_or("");
        if value.is_empty() {
            continue;
        }
        let id = value
            .parse::<i64>()
            .map_err(|_| AppError::InvalidChatId(format!("{value} (line {})", line + 1)))?;
        ids.push(id);
    }

    Ok(ids)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

fn is_header(row: &[String]) -> bool {
    row.iter()
        .any(|cell| !cell.is_empty() && cell.parse::<f64>().is_err())
}

fn read_csv_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::Other(format!("cannot read {}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::Other(format!("{}: {e}", path.display())))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Cell values of the first worksheet, row by row, with empty strings for
/// the cells Excel leaves out.
fn read_sheet_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| AppError::Other(format!("cannot open {}: {e}", path.display())))?;

    let shared: Vec<String> = match read_entry(&mut archive, SHARED_STRINGS) {
        Ok(xml) => SHARED_RE
            .captures_iter(&xml)
            .map(|si| inline_text(&si[1]))
            .collect(),
        Err(_) => Vec::new(),
    };
    let sheet = read_entry(&mut archive, FIRST_SHEET)
        .map_err(|e| AppError::Other(format!("{}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for row in ROW_RE.captures_iter(&sheet) {
        let mut cells: Vec<String> = Vec::new();
        for cell in CELL_RE.captures_iter(&row[1]) {
            let attrs = &cell[1];
            let Some(reference) = REF_RE.captures(attrs) else {
                continue;
            };
            let col = column_index(&reference[1]);
            let body = cell.get(2).map_or("", |m| m.as_str());
            let value = cell_value(TYPE_RE.captures(attrs).as_ref().map(|t| &t[1]), body, &shared);

            if cells.len() <= col {
                cells.resize(col + 1, String::new());
            }
            cells[col] = value;
        }
        rows.push(cells);
    }
    Ok(rows)
}

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> AppResult<String> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| AppError::Other(format!("{name}: {e}")))?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

fn cell_value(kind: Option<&str>, body: &str, shared: &[String]) -> String {
    let raw = VALUE_RE.captures(body).map(|v| v[1].to_string());
    match kind {
        Some("s") => raw
            .and_then(|i| i.parse::<usize>().ok())
            .and_then(|i| shared.get(i).cloned())
            .unwrap_or_default(),
        Some("inlineStr") => inline_text(body),
        Some("str") => raw.map(|v| unescape(&v)).unwrap_or_default(),
        _ => raw.map(|v| integral(&v)).unwrap_or_default(),
    }
}

/// Numbers are stored as floats; ids come back without a fractional part.
fn integral(value: &str) -> String {
    match value.parse::<f64>() {
        Ok(n) if n.fract() == 0.0 && value.parse::<i64>().is_err() => format!("{n:.0}"),
        _ => value.to_string(),
    }
}

fn inline_text(xml: &str) -> String {
    TEXT_RE
        .captures_iter(xml)
        .map(|t| unescape(&t[1]))
        .collect::<String>()
        .trim()
        .to_string()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// `A` → 0, `Z` → 25, `AA` → 26.
fn column_index(letters: &str) -> usize {
    letters
        .bytes()
        .fold(0, |acc, b| acc * 26 + usize::from(b - b'A' + 1))
        - 1
}

/// Write chat ids as a single-column CSV with an `id` header.
pub fn write_ids(path: &Path, ids: &[i64]) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Other(format!("CSV open error: {e}")))?;

    writer
        .write_record(["id"])
        .map_err(|e| AppError::Other(format!("CSV write error: {e}")))?;
    for id in ids {
        writer
            .write_record([id.to_string()])
            .map_err(|e| AppError::Other(format!("CSV write error: {e}")))?;
    }

    writer.flush()?;
    Ok(())
}
