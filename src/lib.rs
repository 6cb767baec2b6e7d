//! # reportcheck - student report validation
//!
//! Checks a fixed-layout student status report (a spreadsheet form filled
//! in by tutors) against score, length, spelling and content rules, and
//! produces a severity-classified list of findings.
//!
//! ## Overview
//!
//! The report is read through a [`GridAccessor`], a read-only 1-based cell
//! lookup. A [`Catalog`] says where every field lives and how it is judged.
//! [`run_validation`] resolves the fields, runs each selected check family
//! on its own thread and merges the results into a [`ValidationRun`].
//!
//! ## Modules
//!
//! - [`grid`] - Cell values, coordinates and the in-memory grid
//! - [`catalog`] - Field layout, thresholds and heuristic tables
//! - [`resolve`] - Turning a field's cells into one value
//! - [`rules`] - The four check families
//! - [`aggregate`] - Running checks and merging findings
//! - [`workbook`] - Loading a grid from a spreadsheet file
//! - [`formatters`] - JSON and text reports
//! - [`config`] - Configuration file loading
//!
//! ## Example
//!
//! ```
//! use reportcheck::{run_validation, Catalog, CheckCategory, MemoryGrid, Severity};
//!
//! let grid = MemoryGrid::new()
//!     .with_number(12, 3, 80.0)
//!     .with_number(12, 4, 75.0)
//!     .with_number(12, 8, 160.0);
//!
//! let run = run_validation(&grid, &Catalog::standard(), &[CheckCategory::Score]);
//!
//! // 80 + 75 != 160
//! assert!(run
//!     .with_severity(Severity::Error)
//!     .any(|f| f.message.contains("calculated=155, declared=160")));
//! ```

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod formatters;
pub mod grid;
pub mod resolve;
pub mod rules;
pub mod ui;
pub mod validation;
pub mod workbook;

pub use aggregate::{aggregate, run_validation};
pub use catalog::{Catalog, CatalogError};
pub use grid::{CellValue, Coordinate, GridAccessor, GridUnavailable, MemoryGrid};
pub use validation::{
    CheckCategory, Finding, FindingCategory, Severity, SeverityCounts, ValidationRun, Validator,
};
