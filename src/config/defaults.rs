//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

use crate::validation::CheckCategory;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_true, bool, true);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Which check families run. All are on unless switched off here or on
/// the command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChecksConfig {
    /// Score ranges, completeness and totals (default: true)
    #[serde(default = "default_true")]
    pub score: bool,
    /// Narrative section lengths (default: true)
    #[serde(default = "default_true")]
    pub text_length: bool,
    /// Typo and style heuristics (default: true)
    #[serde(default = "default_true")]
    pub spelling: bool,
    /// Keyword and phrasing heuristics (default: true)
    #[serde(default = "default_true")]
    pub content: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            score: default_true(),
            text_length: default_true(),
            spelling: default_true(),
            content: default_true(),
        }
    }
}

impl ChecksConfig {
    pub fn is_enabled(&self, category: CheckCategory) -> bool {
        match category {
            CheckCategory::Score => self.score,
            CheckCategory::TextLength => self.text_length,
            CheckCategory::Spelling => self.spelling,
            CheckCategory::Content => self.content,
        }
    }

    /// Enabled categories in invocation order.
    pub fn enabled(&self) -> Vec<CheckCategory> {
        CheckCategory::ALL
            .into_iter()
            .filter(|category| self.is_enabled(*category))
            .collect()
    }

    pub fn disable(&mut self, category: CheckCategory) {
        match category {
            CheckCategory::Score => self.score = false,
            CheckCategory::TextLength => self.text_length = false,
            CheckCategory::Spelling => self.spelling = false,
            CheckCategory::Content => self.content = false,
        }
    }
}
