//! Content adequacy heuristics for the qualitative sections.
//!
//! Each section with a [`ContentRule`] is checked for keyword coverage,
//! discouraged stock phrases, sentence count and, for goal-type sections,
//! concrete numbers. Empty sections are skipped; the length checks already
//! report them.

use tracing::{debug, warn};

use crate::catalog::{Catalog, ContentRule, TextField};
use crate::grid::GridAccessor;
use crate::resolve::resolve;
use crate::rules::patterns::{contains_digit, count_sentences, find_patterns};
use crate::validation::{CheckCategory, Finding, FindingCategory, Validator};

const ITEM_PREFIX: &str = "Content";

pub struct ContentAdequacyValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ContentAdequacyValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    fn check_rule(&self, rule: &ContentRule, text: &str, findings: &mut Vec<Finding>) {
        let thresholds = &self.catalog.thresholds;
        let item = format!("{} - {}", ITEM_PREFIX, rule.field);

        if !rule.keywords.is_empty() {
            let found = find_patterns(text, &rule.keywords);
            let ratio = found.len() as f64 / rule.keywords.len() as f64;
            if ratio < thresholds.keyword_ratio {
                let hint: Vec<&str> = rule
                    .keywords
                    .iter()
                    .take(thresholds.keyword_hint_count)
                    .map(String::as_str)
                    .collect();
                findings.push(Finding::warning(
                    &item,
                    FindingCategory::KeywordDeficiency,
                    format!(
                        "few of the expected keywords appear ({} of {}); suggested keywords: {}",
                        found.len(),
                        rule.keywords.len(),
                        hint.join(", ")
                    ),
                ));
            }
        }

        for phrase in find_patterns(text, &rule.negative_patterns) {
            findings.push(Finding::warning(
                &item,
                FindingCategory::DiscouragedPhrase,
                format!("avoid the phrase '{}' and describe the situation concretely", phrase),
            ));
        }

        let sentences = count_sentences(text, &thresholds.sentence_terminators);
        if sentences < rule.min_sentences {
            findings.push(Finding::info(
                &item,
                FindingCategory::SentenceCountLow,
                format!(
                    "needs a more detailed explanation ({} sentence(s), recommended at least {})",
                    sentences, rule.min_sentences
                ),
            ));
        }

        if rule.require_specifics && !contains_digit(text) {
            findings.push(Finding::info(
                &item,
                FindingCategory::SpecificityLow,
                "include numeric targets or concrete deadlines",
            ));
        }
    }
}

impl Validator for ContentAdequacyValidator<'_> {
    fn category(&self) -> CheckCategory {
        CheckCategory::Content
    }

    fn check(&self, grid: &dyn GridAccessor) -> Vec<Finding> {
        let mut findings = Vec::new();

        for rule in &self.catalog.content_rules {
            let Some(field) = self.catalog.text_field(&rule.field) else {
                warn!(field = %rule.field, "content rule refers to an unknown field; skipped");
                continue;
            };

            let resolved = resolve(&field.field, TextField::KIND, grid);
            if let Some(text) = resolved.text() {
                self.check_rule(rule, text, &mut findings);
            }
        }

        debug!(findings = findings.len(), "content checks finished");
        findings
    }
}
