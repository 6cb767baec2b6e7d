//! Field catalog: where each report field lives and how it is judged.
//!
//! The catalog is plain data. Validators look fields up here instead of
//! hard-coding cell positions, so the layout can be inspected, overridden
//! from a config file, and tested on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::Coordinate;

pub mod standard;
pub mod validation;

pub use standard::*;
pub use validation::CatalogError;

/// A named report field and the cells it occupies, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub coordinates: Vec<Coordinate>,
}

impl FieldSpec {
    /// Single-cell field.
    pub fn scalar(id: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            id: id.into(),
            coordinates: vec![Coordinate::new(row, col)],
        }
    }

    /// Field spanning `rows` cells downward from `(row, col)`.
    pub fn span(id: impl Into<String>, row: u32, col: u32, rows: u32) -> Self {
        Self {
            id: id.into(),
            coordinates: Coordinate::new(row, col).span_down(rows),
        }
    }

    pub fn first_coordinate(&self) -> Option<Coordinate> {
        self.coordinates.first().copied()
    }
}

/// How a field's cells are turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Raw value of the first cell
    Numeric,
    /// Space-joined text of every non-empty cell
    Text,
}

// ============================================================================
// SCORES
// ============================================================================

/// Score table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreGroup {
    Target,
    Result,
    Average,
}

impl ScoreGroup {
    pub const ALL: [ScoreGroup; 3] = [ScoreGroup::Target, ScoreGroup::Result, ScoreGroup::Average];

    /// Label used on the report form.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreGroup::Target => "目標",
            ScoreGroup::Result => "結果",
            ScoreGroup::Average => "平均",
        }
    }
}

impl fmt::Display for ScoreGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreGroup::Target => write!(f, "Target"),
            ScoreGroup::Result => write!(f, "Result"),
            ScoreGroup::Average => write!(f, "Average"),
        }
    }
}

/// What a score cell holds, which decides its range rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreRole {
    Subject,
    Total,
    Rank,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreField {
    #[serde(flatten)]
    pub field: FieldSpec,
    pub group: ScoreGroup,
    pub role: ScoreRole,
}

impl ScoreField {
    pub const KIND: FieldKind = FieldKind::Numeric;
}

/// Numeric limits for the score table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBounds {
    pub subject_min: f64,
    pub subject_max: f64,
    pub total_max: f64,
    pub rank_min: f64,
    /// Allowed difference between the subject sum and the declared total
    pub sum_tolerance: f64,
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self {
            subject_min: SUBJECT_SCORE_MIN,
            subject_max: SUBJECT_SCORE_MAX,
            total_max: TOTAL_SCORE_MAX,
            rank_min: RANK_MIN,
            sum_tolerance: SUM_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreCatalog {
    pub fields: Vec<ScoreField>,
    pub bounds: ScoreBounds,
}

impl Default for ScoreCatalog {
    fn default() -> Self {
        Self {
            fields: standard_score_fields(),
            bounds: ScoreBounds::default(),
        }
    }
}

impl ScoreCatalog {
    pub fn in_group(&self, group: ScoreGroup) -> impl Iterator<Item = &ScoreField> {
        self.fields.iter().filter(move |f| f.group == group)
    }

    /// The declared total of a group, if the layout has one.
    pub fn total(&self, group: ScoreGroup) -> Option<&ScoreField> {
        self.in_group(group).find(|f| f.role == ScoreRole::Total)
    }
}

// ============================================================================
// NARRATIVE SECTIONS
// ============================================================================

/// A free-text section with its recommended length in characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    #[serde(flatten)]
    pub field: FieldSpec,
    pub min_length: usize,
    pub max_length: usize,
}

impl TextField {
    pub const KIND: FieldKind = FieldKind::Text;

    pub fn id(&self) -> &str {
        &self.field.id
    }
}

/// A canonical form and the misspellings people commonly write instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypoEntry {
    pub canonical: String,
    pub alternates: Vec<String>,
}

/// Content expectations for one narrative section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRule {
    /// Id of a text field in the same catalog
    pub field: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub negative_patterns: Vec<String>,
    #[serde(default = "default_min_sentences")]
    pub min_sentences: usize,
    /// Expect digits (scores, dates, counts) in the text
    #[serde(default)]
    pub require_specifics: bool,
}

fn default_min_sentences() -> usize {
    1
}

/// Heuristic thresholds for the text checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub keyword_ratio: f64,
    pub keyword_hint_count: usize,
    pub repeat_run: usize,
    pub punctuation_min_length: usize,
    pub punctuation_min_count: usize,
    pub full_stop: char,
    pub sentence_terminators: String,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            keyword_ratio: KEYWORD_RATIO_MIN,
            keyword_hint_count: KEYWORD_HINT_COUNT,
            repeat_run: REPEAT_RUN_MIN,
            punctuation_min_length: PUNCTUATION_CHECK_MIN_LENGTH,
            punctuation_min_count: PUNCTUATION_MIN_COUNT,
            full_stop: FULL_STOP,
            sentence_terminators: SENTENCE_TERMINATORS.to_string(),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// The complete field layout and rule tables for one report template.
///
/// Any section omitted from a config file keeps its standard value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub scores: ScoreCatalog,
    pub text_fields: Vec<TextField>,
    pub typos: Vec<TypoEntry>,
    pub content_rules: Vec<ContentRule>,
    pub thresholds: Thresholds,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The layout of the standard student status report template.
    pub fn standard() -> Self {
        Self {
            scores: ScoreCatalog::default(),
            text_fields: standard_text_fields(),
            typos: standard_typos(),
            content_rules: standard_content_rules(),
            thresholds: Thresholds::default(),
        }
    }

    pub fn text_field(&self, id: &str) -> Option<&TextField> {
        self.text_fields.iter().find(|f| f.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_score_layout() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.scores.fields.len(), 19);

        for group in ScoreGroup::ALL {
            let subjects = catalog
                .scores
                .in_group(group)
                .filter(|f| f.role == ScoreRole::Subject)
                .count();
            assert_eq!(subjects, 5, "group {}", group);
            assert!(catalog.scores.total(group).is_some());
        }

        let rank: Vec<_> = catalog
            .scores
            .fields
            .iter()
            .filter(|f| f.role == ScoreRole::Rank)
            .collect();
        assert_eq!(rank.len(), 1);
        assert_eq!(rank[0].group, ScoreGroup::Result);
        assert_eq!(rank[0].field.coordinates, vec![Coordinate::new(12, 9)]);
    }

    #[test]
    fn test_result_total_coordinate() {
        let catalog = Catalog::standard();
        let total = catalog.scores.total(ScoreGroup::Result).unwrap();
        assert_eq!(total.field.id, "合計_結果");
        assert_eq!(total.field.first_coordinate(), Some(Coordinate::new(12, 8)));
    }

    #[test]
    fn test_text_field_lookup() {
        let catalog = Catalog::standard();
        let goal = catalog.text_field("今後の目標").unwrap();
        assert_eq!(goal.min_length, 50);
        assert_eq!(goal.max_length, 300);
        assert_eq!(goal.field.coordinates.len(), 4);
        assert_eq!(goal.field.first_coordinate(), Some(Coordinate::new(28, 2)));
        assert!(catalog.text_field("存在しない").is_none());
    }

    #[test]
    fn test_field_spec_constructors() {
        let scalar = FieldSpec::scalar("順位", 12, 9);
        assert_eq!(scalar.coordinates, vec![Coordinate::new(12, 9)]);

        let span = FieldSpec::span("宿題について", 38, 10, 2);
        assert_eq!(
            span.coordinates,
            vec![Coordinate::new(38, 10), Coordinate::new(39, 10)]
        );
    }

    #[test]
    fn test_partial_yaml_keeps_standard_sections() {
        let yaml = r#"
thresholds:
  repeat_run: 6
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.thresholds.repeat_run, 6);
        assert_eq!(catalog.thresholds.keyword_ratio, KEYWORD_RATIO_MIN);
        assert_eq!(catalog.text_fields, standard_text_fields());
        assert_eq!(catalog.scores, ScoreCatalog::default());
    }

    #[test]
    fn test_yaml_round_trip_of_standard_catalog() {
        let catalog = Catalog::standard();
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_content_rule_defaults() {
        let yaml = r#"
field: 宿題について
keywords: [宿題]
"#;
        let rule: ContentRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.min_sentences, 1);
        assert!(rule.negative_patterns.is_empty());
        assert!(!rule.require_specifics);
    }
}
