//! Standard layout of the student status report template.
//!
//! Coordinates are 1-based `(row, col)` as shown in the spreadsheet.

use super::{ContentRule, FieldSpec, ScoreField, ScoreGroup, ScoreRole, TextField, TypoEntry};

// =========================================================================
// THRESHOLDS
// =========================================================================

/// Lowest valid subject score
pub const SUBJECT_SCORE_MIN: f64 = 0.0;
/// Highest valid subject score
pub const SUBJECT_SCORE_MAX: f64 = 100.0;
/// Sanity ceiling for a five-subject total
pub const TOTAL_SCORE_MAX: f64 = 500.0;
/// Lowest valid class rank
pub const RANK_MIN: f64 = 1.0;
/// Allowed float drift between summed subjects and the declared total
pub const SUM_TOLERANCE: f64 = 0.01;

/// Keyword coverage below this ratio is reported
pub const KEYWORD_RATIO_MIN: f64 = 0.2;
/// Number of expected keywords quoted back as a hint
pub const KEYWORD_HINT_COUNT: usize = 4;
/// A character repeated this many times in a row is reported
pub const REPEAT_RUN_MIN: usize = 4;
/// Texts longer than this are expected to contain full stops
pub const PUNCTUATION_CHECK_MIN_LENGTH: usize = 100;
/// Minimum full stops in a long text
pub const PUNCTUATION_MIN_COUNT: usize = 2;
/// Sentence-ending mark counted by the punctuation check
pub const FULL_STOP: char = '。';
/// Marks that end a sentence for the sentence count
pub const SENTENCE_TERMINATORS: &str = "。！？";

/// Subjects in column order, starting at column 3.
pub const SUBJECTS: [&str; 5] = ["国語", "社会", "数学", "理科", "英語"];

const SUBJECT_FIRST_COL: u32 = 3;
const TOTAL_COL: u32 = 8;
const RANK_COL: u32 = 9;
const TEXT_SPAN_ROWS: u32 = 4;

fn score_row(group: ScoreGroup) -> u32 {
    match group {
        ScoreGroup::Target => 10,
        ScoreGroup::Result => 12,
        ScoreGroup::Average => 14,
    }
}

// =========================================================================
// TABLES
// =========================================================================

/// Score cells: per group, five subjects then the total; rank follows the
/// result total.
pub fn standard_score_fields() -> Vec<ScoreField> {
    let mut fields = Vec::new();

    for group in ScoreGroup::ALL {
        let row = score_row(group);
        for (offset, subject) in SUBJECTS.iter().enumerate() {
            fields.push(ScoreField {
                field: FieldSpec::scalar(
                    format!("{}_{}", subject, group.label()),
                    row,
                    SUBJECT_FIRST_COL + offset as u32,
                ),
                group,
                role: ScoreRole::Subject,
            });
        }
        fields.push(ScoreField {
            field: FieldSpec::scalar(format!("合計_{}", group.label()), row, TOTAL_COL),
            group,
            role: ScoreRole::Total,
        });
        if group == ScoreGroup::Result {
            fields.push(ScoreField {
                field: FieldSpec::scalar("順位", row, RANK_COL),
                group,
                role: ScoreRole::Rank,
            });
        }
    }

    fields
}

fn text_field(id: &str, row: u32, col: u32, min_length: usize, max_length: usize) -> TextField {
    TextField {
        field: FieldSpec::span(id, row, col, TEXT_SPAN_ROWS),
        min_length,
        max_length,
    }
}

/// Narrative sections, each four rows tall.
pub fn standard_text_fields() -> Vec<TextField> {
    vec![
        text_field("現在の学習課題", 18, 2, 100, 500),
        text_field("課題に対する進捗状況", 18, 10, 100, 500),
        text_field("今後の目標", 28, 2, 50, 300),
        text_field("目標に向けた指導計画", 28, 10, 100, 500),
        text_field("授業態度・意欲・遅刻等", 38, 2, 50, 400),
        text_field("宿題について", 38, 10, 50, 400),
        text_field("家庭学習アドバイス", 48, 2, 100, 500),
        text_field("夏期講習提案理由", 50, 2, 50, 300),
    ]
}

fn typo(canonical: &str, alternates: &[&str]) -> TypoEntry {
    TypoEntry {
        canonical: canonical.to_string(),
        alternates: alternates.iter().map(|s| s.to_string()).collect(),
    }
}

/// Commonly confused spellings, canonical form first.
pub fn standard_typos() -> Vec<TypoEntry> {
    vec![
        typo("そして", &["そうして", "そしして"]),
        typo("ということ", &["とゆうこと", "とゆう事"]),
        typo("言う", &["ゆう"]),
        typo("いう", &["ゆう"]),
        typo("そういう", &["そうゆう"]),
        typo("どういう", &["どうゆう"]),
        typo("頑張", &["がんば"]),
        typo("一生懸命", &["いっしょうけんめい", "いっしょけんめい"]),
        typo("できる", &["出来る"]),
        typo("わかる", &["分かる", "判る"]),
        typo("おこなう", &["行なう"]),
        typo("あらわす", &["表わす", "現わす"]),
    ]
}

fn rule(
    field: &str,
    keywords: &[&str],
    negative_patterns: &[&str],
    min_sentences: usize,
    require_specifics: bool,
) -> ContentRule {
    ContentRule {
        field: field.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        negative_patterns: negative_patterns.iter().map(|s| s.to_string()).collect(),
        min_sentences,
        require_specifics,
    }
}

/// Content expectations for the qualitative sections.
pub fn standard_content_rules() -> Vec<ContentRule> {
    vec![
        rule(
            "現在の学習課題",
            &["課題", "問題", "苦手", "理解", "困難", "改善", "弱点", "不足"],
            &["特になし", "問題なし", "ありません"],
            2,
            false,
        ),
        rule(
            "課題に対する進捗状況",
            &["進捗", "改善", "向上", "取り組み", "結果", "成果", "変化", "前回"],
            &["変化なし", "進捗なし"],
            2,
            false,
        ),
        rule(
            "今後の目標",
            &["目標", "点数", "成績", "内申", "向上", "達成", "点", "以上"],
            &["未定", "特になし"],
            1,
            true,
        ),
        rule(
            "目標に向けた指導計画",
            &["指導", "計画", "方法", "実施", "授業", "学習", "対策", "強化"],
            &["継続", "そのまま"],
            2,
            true,
        ),
        rule(
            "授業態度・意欲・遅刻等",
            &["態度", "意欲", "集中", "参加", "遅刻", "欠席", "積極", "真面目"],
            &[],
            1,
            false,
        ),
        rule(
            "宿題について",
            &["宿題", "提出", "取り組み", "正答", "理解度", "完成度", "期限", "質"],
            &[],
            1,
            false,
        ),
        rule(
            "家庭学習アドバイス",
            &["家庭", "学習", "アドバイス", "方法", "時間", "習慣", "復習", "予習"],
            &["特になし"],
            2,
            false,
        ),
    ]
}
