//! Pattern matching shared by the text heuristics.
//!
//! All lookups are table-driven substring searches; nothing here attempts
//! real linguistic analysis.

use regex::Regex;
use std::collections::HashSet;

use crate::catalog::TypoEntry;

/// Unicode decimal digit, full-width digits included
const DIGIT_PATTERN: &str = r"\d";

/// Find which patterns occur in `text`.
///
/// Matching is case-insensitive. Each pattern is reported at most once, in
/// the order the patterns are given.
///
/// ```
/// use reportcheck::rules::patterns::find_patterns;
///
/// let patterns = vec!["特になし".to_string(), "未定".to_string()];
/// assert_eq!(find_patterns("目標は未定です", &patterns), vec!["未定"]);
/// ```
pub fn find_patterns(text: &str, patterns: &[String]) -> Vec<String> {
    if text.is_empty() || patterns.is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let mut found_patterns = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        let pattern_lower = pattern.to_lowercase();
        if pattern_lower.is_empty() {
            continue;
        }

        if !seen.contains(&pattern_lower) && text_lower.contains(&pattern_lower) {
            found_patterns.push(pattern.clone());
            seen.insert(pattern_lower);
        }
    }

    found_patterns
}

/// A misspelling found in a text together with its suggested correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypoMatch<'a> {
    pub canonical: &'a str,
    pub alternate: &'a str,
}

/// Look up every known misspelling in `text`.
///
/// One match is produced per (canonical, alternate) pair, in table order.
/// An occurrence that sits entirely inside an occurrence of a longer
/// alternate is not reported on its own, so "とゆうこと" does not also
/// report its inner "ゆう".
pub fn find_typos<'a>(text: &str, table: &'a [TypoEntry]) -> Vec<TypoMatch<'a>> {
    let alternates = || {
        table.iter().flat_map(|entry| {
            entry
                .alternates
                .iter()
                .filter(|alt| !alt.is_empty())
                .map(move |alt| (entry.canonical.as_str(), alt.as_str()))
        })
    };

    let spans: Vec<(usize, usize)> = alternates()
        .flat_map(|(_, alt)| {
            text.match_indices(alt)
                .map(|(start, m)| (start, start + m.len()))
        })
        .collect();

    let inside_longer = |start: usize, end: usize| {
        spans
            .iter()
            .any(|&(s, e)| s <= start && end <= e && e - s > end - start)
    };

    alternates()
        .filter(|(_, alt)| {
            text.match_indices(alt)
                .any(|(start, m)| !inside_longer(start, start + m.len()))
        })
        .map(|(canonical, alternate)| TypoMatch {
            canonical,
            alternate,
        })
        .collect()
}

/// Runs of one character repeated at least `min_len` times in a row.
///
/// Line breaks are ignored. Each run is returned in full, in text order.
pub fn repeated_runs(text: &str, min_len: usize) -> Vec<String> {
    let mut runs = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut len = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            len += 1;
        }
        if len >= min_len && c != '\n' && c != '\r' {
            runs.push(c.to_string().repeat(len));
        }
    }

    runs
}

/// Count sentences: fragments between terminators that are not blank.
pub fn count_sentences(text: &str, terminators: &str) -> usize {
    text.split(|c: char| terminators.contains(c))
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Number of characters in `text`, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Whether the text contains any decimal digit.
pub fn contains_digit(text: &str) -> bool {
    match Regex::new(DIGIT_PATTERN) {
        Ok(re) => re.is_match(text),
        Err(_) => text.chars().any(|c| c.is_ascii_digit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_typos;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_single_pattern() {
        let result = find_patterns("特になし", &strings(&["特になし"]));
        assert_eq!(result, vec!["特になし"]);
    }

    #[test]
    fn test_find_patterns_case_insensitive() {
        let result = find_patterns("Homework was OK", &strings(&["homework"]));
        assert_eq!(result, vec!["homework"]);
    }

    #[test]
    fn test_find_patterns_reports_once() {
        let result = find_patterns("継続、継続、継続", &strings(&["継続", "継続"]));
        assert_eq!(result, vec!["継続"]);
    }

    #[test]
    fn test_find_patterns_empty_inputs() {
        assert!(find_patterns("", &strings(&["a"])).is_empty());
        assert!(find_patterns("abc", &[]).is_empty());
        assert!(find_patterns("abc", &strings(&[""])).is_empty());
    }

    #[test]
    fn test_typo_longest_alternate_wins() {
        let table = standard_typos();
        let found = find_typos("彼が言っていたとゆうことです", &table);
        assert_eq!(
            found,
            vec![TypoMatch {
                canonical: "ということ",
                alternate: "とゆうこと",
            }]
        );
    }

    #[test]
    fn test_typo_bare_alternate_matches_every_canonical() {
        let table = standard_typos();
        let found = find_typos("先生がゆうには", &table);
        let canonicals: Vec<&str> = found.iter().map(|m| m.canonical).collect();
        assert_eq!(canonicals, vec!["言う", "いう"]);
    }

    #[test]
    fn test_typo_inner_alternate_reported_when_also_standalone() {
        let table = standard_typos();
        let found = find_typos("どうゆう意味かとゆう", &table);
        let alternates: Vec<&str> = found.iter().map(|m| m.alternate).collect();
        assert_eq!(alternates, vec!["ゆう", "ゆう", "どうゆう"]);
    }

    #[test]
    fn test_typo_multiple_distinct_matches() {
        let table = standard_typos();
        let found = find_typos("がんばって出来るようになった", &table);
        let canonicals: Vec<&str> = found.iter().map(|m| m.canonical).collect();
        assert_eq!(canonicals, vec!["頑張", "できる"]);
    }

    #[test]
    fn test_typo_none() {
        let table = standard_typos();
        assert!(find_typos("毎日きちんと復習している。", &table).is_empty());
    }

    #[test]
    fn test_repeated_runs() {
        assert_eq!(repeated_runs("aaaaa", 4), vec!["aaaaa"]);
        assert_eq!(repeated_runs("aaa", 4), Vec::<String>::new());
        assert_eq!(repeated_runs("すごーーーーい！！！！", 4), vec!["ーーーー", "！！！！"]);
    }

    #[test]
    fn test_repeated_runs_ignore_line_breaks() {
        assert!(repeated_runs("a\n\n\n\nb", 4).is_empty());
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences("一文目。二文目！三文目？", "。！？"), 3);
        assert_eq!(count_sentences("終わりなし", "。！？"), 1);
        assert_eq!(count_sentences("。。 。", "。！？"), 0);
        assert_eq!(count_sentences("", "。！？"), 0);
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("宿題"), 2);
        assert_eq!(char_len("ab"), 2);
    }

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit("80点"));
        assert!(contains_digit("８０点"));
        assert!(!contains_digit("八十点"));
        assert!(!contains_digit("点数を上げる"));
    }
}
