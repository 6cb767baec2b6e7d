//! Run the selected check families and merge their findings.

use std::thread;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::grid::GridAccessor;
use crate::rules::{
    ContentAdequacyValidator, ScoreValidator, SpellingHeuristicValidator, TextLengthValidator,
};
use crate::validation::{
    CheckCategory, Finding, FindingCategory, Severity, SeverityCounts, ValidationRun, Validator,
};

/// Item label of the synthesized run-level finding.
pub const OVERALL_ITEM: &str = "Overall";

/// Build the validator for one category over `catalog`.
pub fn validator_for(category: CheckCategory, catalog: &Catalog) -> Box<dyn Validator + '_> {
    match category {
        CheckCategory::Score => Box::new(ScoreValidator::new(&catalog.scores)),
        CheckCategory::TextLength => Box::new(TextLengthValidator::new(&catalog.text_fields)),
        CheckCategory::Spelling => Box::new(SpellingHeuristicValidator::new(
            &catalog.text_fields,
            &catalog.typos,
            &catalog.thresholds,
        )),
        CheckCategory::Content => Box::new(ContentAdequacyValidator::new(catalog)),
    }
}

/// Validate `grid` with every enabled category.
///
/// Each validator runs on its own scoped thread. Results are merged in
/// [`CheckCategory::ALL`] order whatever order `enabled` lists them in, so
/// the same inputs always produce the same run. Duplicates in `enabled`
/// are ignored.
pub fn run_validation(
    grid: &dyn GridAccessor,
    catalog: &Catalog,
    enabled: &[CheckCategory],
) -> ValidationRun {
    let validators: Vec<Box<dyn Validator + '_>> = CheckCategory::ALL
        .into_iter()
        .filter(|category| enabled.contains(category))
        .map(|category| validator_for(category, catalog))
        .collect();

    debug!(validators = validators.len(), "starting validation run");

    let batches: Vec<Vec<Finding>> = thread::scope(|scope| {
        let handles: Vec<_> = validators
            .iter()
            .map(|validator| {
                scope.spawn(move || {
                    let findings = validator.check(grid);
                    debug!(
                        category = %validator.category(),
                        findings = findings.len(),
                        "validator finished"
                    );
                    findings
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(findings) => findings,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    });

    aggregate(batches)
}

/// Merge finding batches into a run.
///
/// Appends the overall-status finding when nothing at Error or Warning
/// severity was produced, then counts the final list.
pub fn aggregate(batches: Vec<Vec<Finding>>) -> ValidationRun {
    let mut findings: Vec<Finding> = batches.into_iter().flatten().collect();

    let blocking = findings
        .iter()
        .any(|f| matches!(f.severity, Severity::Error | Severity::Warning));
    if !blocking {
        findings.push(Finding::new(
            OVERALL_ITEM,
            FindingCategory::OverallStatus,
            Severity::Success,
            "no errors or warnings were found",
        ));
    }

    let counts = SeverityCounts::tally(&findings);
    info!(
        errors = counts.error,
        warnings = counts.warning,
        info = counts.info,
        success = counts.success,
        "validation finished"
    );

    ValidationRun { findings, counts }
}
