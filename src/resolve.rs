//! Turns catalog fields into values read from the grid.
//!
//! Every check family goes through [`resolve`], so "the text of field X"
//! is computed in exactly one place.

use crate::catalog::{FieldKind, FieldSpec};
use crate::grid::{CellValue, GridAccessor};

/// Value of a field after reading its cells.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Empty,
}

/// A field read fresh for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub id: String,
    pub value: FieldValue,
}

impl ResolvedField {
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self.value {
            FieldValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == FieldValue::Empty
    }
}

/// Resolve a field against the grid.
///
/// Numeric fields return the raw value of their first cell; a blank text
/// cell counts as empty. Text fields join the trimmed, non-empty contents
/// of all their cells with single spaces, in coordinate order.
pub fn resolve(spec: &FieldSpec, kind: FieldKind, grid: &dyn GridAccessor) -> ResolvedField {
    let value = match kind {
        FieldKind::Numeric => resolve_scalar(spec, grid),
        FieldKind::Text => resolve_text(spec, grid),
    };

    ResolvedField {
        id: spec.id.clone(),
        value,
    }
}

fn resolve_scalar(spec: &FieldSpec, grid: &dyn GridAccessor) -> FieldValue {
    let Some(coord) = spec.first_coordinate() else {
        return FieldValue::Empty;
    };

    match grid.value_at(coord) {
        CellValue::Number(n) => FieldValue::Number(n),
        CellValue::Text(s) if s.trim().is_empty() => FieldValue::Empty,
        CellValue::Text(s) => FieldValue::Text(s),
        CellValue::Empty => FieldValue::Empty,
    }
}

fn resolve_text(spec: &FieldSpec, grid: &dyn GridAccessor) -> FieldValue {
    let parts: Vec<String> = spec
        .coordinates
        .iter()
        .filter_map(|coord| grid.value_at(*coord).display_text())
        .collect();

    if parts.is_empty() {
        FieldValue::Empty
    } else {
        FieldValue::Text(parts.join(" "))
    }
}
