use reportcheck::catalog::{Catalog, ScoreGroup};
use reportcheck::grid::{CellValue, MemoryGrid};

/// Section texts that pass every length, spelling and content rule.
pub const SECTION_TEXTS: [(&str, &str); 8] = [
    (
        "現在の学習課題",
        "数学では一次関数の文章題に苦手意識があり、式を立てる段階で手が止まることが多い。計算問題の正答率は安定しているが、図形の証明では根拠の書き方に理解の不足が見られる。英語は長文読解で語彙が弱点となっており、時間内に最後まで読み切れない場面がある。",
    ),
    (
        "課題に対する進捗状況",
        "前回の面談以降、文章題は毎回の授業で三問ずつ演習に取り組み、式を立てるまでの時間が短くなってきた。小テストの結果も向上しており、一次関数の単元では七割以上を得点できるようになった。英単語は毎日の確認テストを続けた成果が出始めている。",
    ),
    (
        "今後の目標",
        "次回の定期テストでは数学で80点以上、英語で75点以上を目標とする。内申点を1つ上げられるよう、提出物も期限内に仕上げる。",
    ),
    (
        "目標に向けた指導計画",
        "毎週2回の授業のうち1回を文章題の対策に充て、解き方の手順を板書で確認しながら指導する。英語は単語テストを毎回実施し、間違えた語を次の授業で再確認する。テスト2週間前からは過去問を使った演習計画を立て、弱点単元を重点的に強化する。",
    ),
    (
        "授業態度・意欲・遅刻等",
        "授業中は集中して話を聞いており、質問にも積極的に答えている。遅刻や欠席はなく、毎回真面目に課題へ向かう姿勢が見られる。",
    ),
    (
        "宿題について",
        "宿題は毎回期限を守って提出できている。正答率は八割前後で、間違えた問題も解き直しをしてから持ってくるなど、丁寧に取り組んでいる。",
    ),
    (
        "家庭学習アドバイス",
        "家庭では一日30分を目安に、その日の授業内容を復習する習慣をつけてほしい。特に数学は解説を読むだけでなく、何も見ずにもう一度解き直す方法が効果的である。英単語は寝る前に10分間、声に出して確認するとよい。",
    ),
    (
        "夏期講習提案理由",
        "夏期講習では一学期の総復習を行い、苦手な文章題と英語長文を集中的に演習することで、二学期の定期テストに向けた土台を固めることができる。",
    ),
];

/// Result-row subject scores used by [`ReportBuilder::complete`]; they sum to 375.
pub const RESULT_SCORES: [f64; 5] = [80.0, 75.0, 90.0, 60.0, 70.0];

const TARGET_SCORES: [f64; 5] = [80.0, 80.0, 85.0, 70.0, 75.0];
const AVERAGE_SCORES: [f64; 5] = [62.5, 58.0, 60.5, 55.0, 61.0];

/// Builds report grids laid out like the standard template.
pub struct ReportBuilder {
    grid: MemoryGrid,
    catalog: Catalog,
}

impl ReportBuilder {
    pub fn empty() -> Self {
        Self {
            grid: MemoryGrid::new(),
            catalog: Catalog::standard(),
        }
    }

    /// A fully filled-in report with no errors or warnings.
    pub fn complete() -> Self {
        let mut builder = Self::empty()
            .scores(ScoreGroup::Target, TARGET_SCORES, Some(390.0))
            .scores(ScoreGroup::Result, RESULT_SCORES, Some(375.0))
            .scores(ScoreGroup::Average, AVERAGE_SCORES, Some(297.0))
            .rank(12.0);
        for (id, text) in SECTION_TEXTS {
            builder = builder.section(id, text);
        }
        builder
    }

    /// Set the five subject scores of a group and optionally its total.
    pub fn scores(mut self, group: ScoreGroup, subjects: [f64; 5], total: Option<f64>) -> Self {
        let row = group_row(group);
        for (offset, score) in subjects.iter().enumerate() {
            self.grid.set(row, 3 + offset as u32, CellValue::Number(*score));
        }
        let total = total.map(CellValue::Number).unwrap_or(CellValue::Empty);
        self.grid.set(row, 8, total);
        self
    }

    /// Clear every subject of a group, keeping its total.
    pub fn clear_subjects(mut self, group: ScoreGroup) -> Self {
        let row = group_row(group);
        for col in 3..=7 {
            self.grid.set(row, col, CellValue::Empty);
        }
        self
    }

    pub fn rank(mut self, rank: f64) -> Self {
        self.grid.set(12, 9, CellValue::Number(rank));
        self
    }

    /// Write `text` into the first cell of a section.
    pub fn section(mut self, id: &str, text: &str) -> Self {
        let (row, col) = self.section_cell(id);
        self.grid.set(row, col, CellValue::Text(text.to_string()));
        self
    }

    /// Clear the first cell of a section.
    pub fn clear_section(mut self, id: &str) -> Self {
        let (row, col) = self.section_cell(id);
        self.grid.set(row, col, CellValue::Empty);
        self
    }

    fn section_cell(&self, id: &str) -> (u32, u32) {
        let coord = self
            .catalog
            .text_field(id)
            .and_then(|f| f.field.first_coordinate())
            .unwrap_or_else(|| panic!("unknown section {}", id));
        (coord.row, coord.col)
    }

    pub fn cell(mut self, row: u32, col: u32, value: CellValue) -> Self {
        self.grid.set(row, col, value);
        self
    }

    pub fn build(self) -> MemoryGrid {
        self.grid
    }
}

fn group_row(group: ScoreGroup) -> u32 {
    match group {
        ScoreGroup::Target => 10,
        ScoreGroup::Result => 12,
        ScoreGroup::Average => 14,
    }
}
