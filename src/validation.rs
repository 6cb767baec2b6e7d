//! Finding model shared by every check family.
//!
//! A [`Finding`] is a domain outcome, not a program fault: checks always
//! return them, never raise them. A [`ValidationRun`] is the ordered,
//! immutable result of one invocation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::GridAccessor;

/// Selectable check families, in invocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    /// Test score ranges and totals
    Score,
    /// Narrative section lengths
    TextLength,
    /// Typo and style heuristics
    Spelling,
    /// Keyword, phrasing and structure heuristics
    Content,
}

impl CheckCategory {
    /// Every category in the order the aggregator invokes them.
    pub const ALL: [CheckCategory; 4] = [
        CheckCategory::Score,
        CheckCategory::TextLength,
        CheckCategory::Spelling,
        CheckCategory::Content,
    ];
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score => write!(f, "Score"),
            Self::TextLength => write!(f, "TextLength"),
            Self::Spelling => write!(f, "Spelling"),
            Self::Content => write!(f, "Content"),
        }
    }
}

/// Severity of a finding.
///
/// Ordered from least to most serious, so `max()` picks the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Run-level confirmation, only produced by the aggregator
    Success,
    /// Advisory
    Info,
    /// Should be addressed before submission
    Warning,
    /// Must be fixed
    Error,
}

impl Severity {
    /// Display order: most serious first.
    pub const DISPLAY_ORDER: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Success,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Info => write!(f, "Info"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// What kind of problem a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCategory {
    RangeError,
    ComputationError,
    MissingValue,
    LengthShort,
    LengthLong,
    PossibleTypo,
    RepeatedCharacter,
    PunctuationSparse,
    KeywordDeficiency,
    DiscouragedPhrase,
    SentenceCountLow,
    SpecificityLow,
    OverallStatus,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RangeError => "RangeError",
            Self::ComputationError => "ComputationError",
            Self::MissingValue => "MissingValue",
            Self::LengthShort => "LengthShort",
            Self::LengthLong => "LengthLong",
            Self::PossibleTypo => "PossibleTypo",
            Self::RepeatedCharacter => "RepeatedCharacter",
            Self::PunctuationSparse => "PunctuationSparse",
            Self::KeywordDeficiency => "KeywordDeficiency",
            Self::DiscouragedPhrase => "DiscouragedPhrase",
            Self::SentenceCountLow => "SentenceCountLow",
            Self::SpecificityLow => "SpecificityLow",
            Self::OverallStatus => "OverallStatus",
        };
        write!(f, "{}", name)
    }
}

/// A single validation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Human-readable locus, e.g. "Text - 今後の目標"
    pub item: String,
    pub category: FindingCategory,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(
        item: impl Into<String>,
        category: FindingCategory,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            category,
            severity,
            message: message.into(),
        }
    }

    pub fn error(
        item: impl Into<String>,
        category: FindingCategory,
        message: impl Into<String>,
    ) -> Self {
        Self::new(item, category, Severity::Error, message)
    }

    pub fn warning(
        item: impl Into<String>,
        category: FindingCategory,
        message: impl Into<String>,
    ) -> Self {
        Self::new(item, category, Severity::Warning, message)
    }

    pub fn info(
        item: impl Into<String>,
        category: FindingCategory,
        message: impl Into<String>,
    ) -> Self {
        Self::new(item, category, Severity::Info, message)
    }
}

/// Per-severity totals for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
    pub success: usize,
}

impl SeverityCounts {
    pub fn tally<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut counts = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::Error => counts.error += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
                Severity::Success => counts.success += 1,
            }
        }
        counts
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Success => self.success,
        }
    }

    pub fn total(&self) -> usize {
        self.error + self.warning + self.info + self.success
    }
}

/// The complete, ordered output of one validation invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRun {
    pub findings: Vec<Finding>,
    pub counts: SeverityCounts,
}

impl ValidationRun {
    /// Check if the run has no errors
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.counts.error > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.counts.warning > 0
    }

    /// Findings of one severity, in generation order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Findings ordered most serious first, ties kept in generation order.
    pub fn sorted_for_display(&self) -> Vec<&Finding> {
        let mut sorted: Vec<&Finding> = self.findings.iter().collect();
        sorted.sort_by(|a, b| b.severity.cmp(&a.severity));
        sorted
    }
}

/// A family of checks over the report grid.
///
/// Implementations hold only read-only configuration, so several can run
/// on separate threads against the same grid.
pub trait Validator: Send + Sync {
    fn category(&self) -> CheckCategory;

    /// Inspect the grid and return findings in catalog declaration order.
    fn check(&self, grid: &dyn GridAccessor) -> Vec<Finding>;
}
