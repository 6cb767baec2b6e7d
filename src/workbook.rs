//! Load the first worksheet of a spreadsheet file into a [`MemoryGrid`].
//!
//! Supports whatever `calamine` auto-detects: xlsx, xlsm, xls, xlsb, ods.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::grid::{CellValue, GridUnavailable, MemoryGrid};

/// Read the first worksheet of `path`.
///
/// Any failure (missing file, unsupported format, corrupt workbook, no
/// sheets) is reported as [`GridUnavailable`]; no partial grid is returned.
pub fn load_grid(path: &Path) -> Result<MemoryGrid, GridUnavailable> {
    let origin = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if !path.exists() {
        return Err(GridUnavailable::new(origin, "file not found"));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| GridUnavailable::new(&origin, format!("failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GridUnavailable::new(&origin, "workbook contains no worksheets"))?
        .map_err(|e| GridUnavailable::new(&origin, format!("failed to read worksheet: {}", e)))?;

    let mut grid = MemoryGrid::new();
    let Some((start_row, start_col)) = range.start() else {
        debug!(origin = %origin, "first worksheet is empty");
        return Ok(grid);
    };

    for (row, col, data) in range.used_cells() {
        let value = cell_value(data);
        if value.is_empty() {
            continue;
        }
        // used_cells() is relative to the range start; grid rows are 1-based
        grid.set(
            start_row + row as u32 + 1,
            start_col + col as u32 + 1,
            value,
        );
    }

    debug!(origin = %origin, cells = grid.len(), "loaded worksheet");
    Ok(grid)
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => CellValue::Text(format!("{}", dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
    }
}
