//! Narrative section length checks.

use tracing::debug;

use crate::catalog::TextField;
use crate::grid::GridAccessor;
use crate::resolve::resolve;
use crate::rules::patterns::char_len;
use crate::validation::{CheckCategory, Finding, FindingCategory, Validator};

const ITEM_PREFIX: &str = "Text";

/// Flags sections that are missing, too short, or very long.
///
/// Length is counted in characters. Overlong text is only advisory.
pub struct TextLengthValidator<'a> {
    fields: &'a [TextField],
}

impl<'a> TextLengthValidator<'a> {
    pub fn new(fields: &'a [TextField]) -> Self {
        Self { fields }
    }

    fn check_field(&self, field: &TextField, grid: &dyn GridAccessor) -> Option<Finding> {
        let id = field.id();
        let item = format!("{} - {}", ITEM_PREFIX, id);
        let resolved = resolve(&field.field, TextField::KIND, grid);

        let Some(text) = resolved.text() else {
            return Some(Finding::error(
                item,
                FindingCategory::MissingValue,
                format!("{} has not been filled in", id),
            ));
        };

        let length = char_len(text);
        if length < field.min_length {
            Some(Finding::warning(
                item,
                FindingCategory::LengthShort,
                format!(
                    "{} is too short ({} characters, recommended at least {})",
                    id, length, field.min_length
                ),
            ))
        } else if length > field.max_length {
            Some(Finding::info(
                item,
                FindingCategory::LengthLong,
                format!(
                    "{} may be too long ({} characters, recommended at most {})",
                    id, length, field.max_length
                ),
            ))
        } else {
            None
        }
    }
}

impl Validator for TextLengthValidator<'_> {
    fn category(&self) -> CheckCategory {
        CheckCategory::TextLength
    }

    fn check(&self, grid: &dyn GridAccessor) -> Vec<Finding> {
        let findings: Vec<Finding> = self
            .fields
            .iter()
            .filter_map(|field| self.check_field(field, grid))
            .collect();

        debug!(findings = findings.len(), "text length checks finished");
        findings
    }
}
