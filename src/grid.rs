//! Read-only cell grid the checks run against.
//!
//! The grid is the boundary to the spreadsheet decoder. The core only ever
//! asks for single cells by 1-based `(row, col)` and never enumerates the
//! sheet, so any decoder can sit behind [`GridAccessor`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual form of the cell, trimmed. `None` for empty or blank cells.
    pub fn display_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Empty => None,
        }
    }
}

/// Render a number the way a person typed it: integral values without `.0`.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A 1-based grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// `count` cells going down from `self`.
    pub fn span_down(self, count: u32) -> Vec<Coordinate> {
        (0..count)
            .map(|offset| Coordinate::new(self.row + offset, self.col))
            .collect()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Read-only 1-based cell lookup.
///
/// Implementations must be safe to share across the validator threads.
pub trait GridAccessor: Sync {
    fn value(&self, row: u32, col: u32) -> CellValue;

    fn value_at(&self, coord: Coordinate) -> CellValue {
        self.value(coord.row, coord.col)
    }
}

/// Grid acquisition failed; no validation run is produced.
#[derive(Debug, Error)]
#[error("grid unavailable ({origin}): {reason}")]
pub struct GridUnavailable {
    /// File name or other description of where the grid was read from
    pub origin: String,
    pub reason: String,
}

impl GridUnavailable {
    pub fn new(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

/// In-memory grid snapshot. Cells that were never set read as empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    cells: BTreeMap<Coordinate, CellValue>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value. Empty values clear the cell.
    pub fn set(&mut self, row: u32, col: u32, value: CellValue) {
        let coord = Coordinate::new(row, col);
        if value.is_empty() {
            self.cells.remove(&coord);
        } else {
            self.cells.insert(coord, value);
        }
    }

    pub fn with_number(mut self, row: u32, col: u32, value: f64) -> Self {
        self.set(row, col, CellValue::Number(value));
        self
    }

    pub fn with_text(mut self, row: u32, col: u32, value: impl Into<String>) -> Self {
        self.set(row, col, CellValue::Text(value.into()));
        self
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl GridAccessor for MemoryGrid {
    fn value(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(&Coordinate::new(row, col))
            .cloned()
            .unwrap_or_default()
    }
}
