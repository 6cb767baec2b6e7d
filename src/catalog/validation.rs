//! Structural checks on a catalog before it is used for a run.

use std::collections::HashSet;

use thiserror::Error;

use super::Catalog;

/// A catalog that cannot be used to validate a report.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("field '{0}' has no coordinates")]
    NoCoordinates(String),

    #[error("field '{field}' uses coordinate ({row}, {col}); rows and columns start at 1")]
    ZeroCoordinate { field: String, row: u32, col: u32 },

    #[error("field id '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("text field '{field}' has min_length {min} greater than max_length {max}")]
    InvertedLengthBounds { field: String, min: usize, max: usize },

    #[error("content rule refers to unknown text field '{0}'")]
    UnknownContentField(String),

    #[error("typo entry '{0}' lists no alternate spellings")]
    EmptyTypoEntry(String),

    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),
}

impl Catalog {
    /// Validate catalog invariants. Returns the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        let score_specs = self.scores.fields.iter().map(|f| &f.field);
        let text_specs = self.text_fields.iter().map(|f| &f.field);

        for spec in score_specs.chain(text_specs) {
            if spec.coordinates.is_empty() {
                return Err(CatalogError::NoCoordinates(spec.id.clone()));
            }
            if let Some(bad) = spec.coordinates.iter().find(|c| c.row == 0 || c.col == 0) {
                return Err(CatalogError::ZeroCoordinate {
                    field: spec.id.clone(),
                    row: bad.row,
                    col: bad.col,
                });
            }
            if !seen.insert(spec.id.as_str()) {
                return Err(CatalogError::DuplicateField(spec.id.clone()));
            }
        }

        for text in &self.text_fields {
            if text.min_length > text.max_length {
                return Err(CatalogError::InvertedLengthBounds {
                    field: text.id().to_string(),
                    min: text.min_length,
                    max: text.max_length,
                });
            }
        }

        for rule in &self.content_rules {
            if self.text_field(&rule.field).is_none() {
                return Err(CatalogError::UnknownContentField(rule.field.clone()));
            }
        }

        for entry in &self.typos {
            if entry.alternates.iter().all(|a| a.is_empty()) {
                return Err(CatalogError::EmptyTypoEntry(entry.canonical.clone()));
            }
        }

        self.validate_thresholds()
    }

    fn validate_thresholds(&self) -> Result<(), CatalogError> {
        let t = &self.thresholds;
        if !(0.0..=1.0).contains(&t.keyword_ratio) {
            return Err(CatalogError::InvalidThreshold(format!(
                "keyword_ratio must be between 0 and 1, got {}",
                t.keyword_ratio
            )));
        }
        if t.repeat_run < 2 {
            return Err(CatalogError::InvalidThreshold(format!(
                "repeat_run must be at least 2, got {}",
                t.repeat_run
            )));
        }
        if t.sentence_terminators.is_empty() {
            return Err(CatalogError::InvalidThreshold(
                "sentence_terminators must not be empty".to_string(),
            ));
        }

        let b = &self.scores.bounds;
        if b.subject_min > b.subject_max {
            return Err(CatalogError::InvalidThreshold(format!(
                "subject_min {} is greater than subject_max {}",
                b.subject_min, b.subject_max
            )));
        }
        if b.sum_tolerance < 0.0 {
            return Err(CatalogError::InvalidThreshold(format!(
                "sum_tolerance must not be negative, got {}",
                b.sum_tolerance
            )));
        }

        Ok(())
    }
}
