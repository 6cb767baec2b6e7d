//! Test score checks: value ranges, per-group completeness and the
//! result total.

use tracing::debug;

use crate::catalog::{ScoreCatalog, ScoreField, ScoreGroup, ScoreRole};
use crate::grid::{format_number, GridAccessor};
use crate::resolve::{resolve, FieldValue};
use crate::validation::{CheckCategory, Finding, FindingCategory, Validator};

const ITEM_PREFIX: &str = "Test scores";

/// Validates the score table.
///
/// Findings come out in three passes: per-field range checks in catalog
/// order, then one completeness warning per empty group, then the result
/// sum check.
pub struct ScoreValidator<'a> {
    catalog: &'a ScoreCatalog,
}

impl<'a> ScoreValidator<'a> {
    pub fn new(catalog: &'a ScoreCatalog) -> Self {
        Self { catalog }
    }

    fn check_range(&self, field: &ScoreField, value: f64) -> Option<Finding> {
        let bounds = &self.catalog.bounds;
        let id = &field.field.id;
        let item = format!("{} - {}", ITEM_PREFIX, id);
        let shown = format_number(value);

        match field.role {
            ScoreRole::Subject if value < bounds.subject_min || value > bounds.subject_max => {
                Some(Finding::error(
                    item,
                    FindingCategory::RangeError,
                    format!(
                        "{} is outside the {}-{} range: {}",
                        id,
                        format_number(bounds.subject_min),
                        format_number(bounds.subject_max),
                        shown
                    ),
                ))
            }
            ScoreRole::Total if value > bounds.total_max => Some(Finding::error(
                item,
                FindingCategory::RangeError,
                format!(
                    "{} is unusually high (over {}): {}",
                    id,
                    format_number(bounds.total_max),
                    shown
                ),
            )),
            ScoreRole::Rank if value < bounds.rank_min => Some(Finding::error(
                item,
                FindingCategory::RangeError,
                format!("{} is not a valid rank: {}", id, shown),
            )),
            _ => None,
        }
    }

    fn check_sum(&self, grid: &dyn GridAccessor) -> Option<Finding> {
        let subjects: Vec<f64> = self
            .catalog
            .in_group(ScoreGroup::Result)
            .filter(|f| f.role == ScoreRole::Subject)
            .filter_map(|f| resolve(&f.field, ScoreField::KIND, grid).number())
            .collect();

        if subjects.is_empty() {
            return None;
        }

        let declared = self
            .catalog
            .total(ScoreGroup::Result)
            .and_then(|f| resolve(&f.field, ScoreField::KIND, grid).number())?;

        let calculated: f64 = subjects.iter().sum();
        if (calculated - declared).abs() <= self.catalog.bounds.sum_tolerance {
            return None;
        }

        Some(Finding::error(
            format!("{} - 合計", ITEM_PREFIX),
            FindingCategory::ComputationError,
            format!(
                "subject scores do not add up to the declared total (calculated={}, declared={})",
                format_number(calculated),
                format_number(declared)
            ),
        ))
    }
}

impl Validator for ScoreValidator<'_> {
    fn category(&self) -> CheckCategory {
        CheckCategory::Score
    }

    fn check(&self, grid: &dyn GridAccessor) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut groups_with_scores = Vec::new();

        for field in &self.catalog.fields {
            let resolved = resolve(&field.field, ScoreField::KIND, grid);
            match resolved.value {
                FieldValue::Number(value) => {
                    if field.role == ScoreRole::Subject
                        && !groups_with_scores.contains(&field.group)
                    {
                        groups_with_scores.push(field.group);
                    }
                    findings.extend(self.check_range(field, value));
                }
                FieldValue::Text(text) => {
                    findings.push(Finding::info(
                        format!("{} - {}", ITEM_PREFIX, field.field.id),
                        FindingCategory::MissingValue,
                        format!(
                            "{} is not a number and was ignored: '{}'",
                            field.field.id,
                            text.trim()
                        ),
                    ));
                }
                FieldValue::Empty => {}
            }
        }

        for group in ScoreGroup::ALL {
            let has_subjects = self
                .catalog
                .in_group(group)
                .any(|f| f.role == ScoreRole::Subject);
            if has_subjects && !groups_with_scores.contains(&group) {
                findings.push(Finding::warning(
                    format!("{} - {}", ITEM_PREFIX, group.label()),
                    FindingCategory::MissingValue,
                    format!("no {} score has been entered for any subject", group),
                ));
            }
        }

        findings.extend(self.check_sum(grid));

        debug!(findings = findings.len(), "score checks finished");
        findings
    }
}
