//! Spelling and style heuristics for narrative sections.
//!
//! Three independent checks run on every filled-in section: known
//! misspellings, runs of a repeated character, and long text with few full
//! stops. They favour recall; a flagged spelling can be legitimate.

use tracing::debug;

use crate::catalog::{TextField, Thresholds, TypoEntry};
use crate::grid::GridAccessor;
use crate::resolve::resolve;
use crate::rules::patterns::{char_len, find_typos, repeated_runs};
use crate::validation::{CheckCategory, Finding, FindingCategory, Validator};

const ITEM_PREFIX: &str = "Spelling";

pub struct SpellingHeuristicValidator<'a> {
    fields: &'a [TextField],
    typos: &'a [TypoEntry],
    thresholds: &'a Thresholds,
}

impl<'a> SpellingHeuristicValidator<'a> {
    pub fn new(
        fields: &'a [TextField],
        typos: &'a [TypoEntry],
        thresholds: &'a Thresholds,
    ) -> Self {
        Self {
            fields,
            typos,
            thresholds,
        }
    }

    fn check_text(&self, item: &str, text: &str, findings: &mut Vec<Finding>) {
        for typo in find_typos(text, self.typos) {
            findings.push(Finding::warning(
                item,
                FindingCategory::PossibleTypo,
                format!(
                    "'{}' may be a misspelling of '{}'",
                    typo.alternate, typo.canonical
                ),
            ));
        }

        let runs = repeated_runs(text, self.thresholds.repeat_run);
        if !runs.is_empty() {
            findings.push(Finding::warning(
                item,
                FindingCategory::RepeatedCharacter,
                format!("excessive repetition of the same character: {}", runs.join(", ")),
            ));
        }

        let full_stops = text.chars().filter(|c| *c == self.thresholds.full_stop).count();
        if char_len(text) > self.thresholds.punctuation_min_length
            && full_stops < self.thresholds.punctuation_min_count
        {
            findings.push(Finding::info(
                item,
                FindingCategory::PunctuationSparse,
                format!(
                    "long text with only {} '{}'; sentences may be run together",
                    full_stops, self.thresholds.full_stop
                ),
            ));
        }
    }
}

impl Validator for SpellingHeuristicValidator<'_> {
    fn category(&self) -> CheckCategory {
        CheckCategory::Spelling
    }

    fn check(&self, grid: &dyn GridAccessor) -> Vec<Finding> {
        let mut findings = Vec::new();

        for field in self.fields {
            let resolved = resolve(&field.field, TextField::KIND, grid);
            let Some(text) = resolved.text() else {
                continue;
            };

            let item = match field.field.first_coordinate() {
                Some(coord) => format!("{} - {} (cell {})", ITEM_PREFIX, field.id(), coord),
                None => format!("{} - {}", ITEM_PREFIX, field.id()),
            };
            self.check_text(&item, text, &mut findings);
        }

        debug!(findings = findings.len(), "spelling checks finished");
        findings
    }
}
