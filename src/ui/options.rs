use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PAIR_COUNT_RE: Regex = Regex::new(r"^(\d+)対(\d+)$").unwrap();
    static ref SINGLE_COUNT_RE: Regex = Regex::new(r"^(\d+)人$").unwrap();
}

/// 下拉选项的归类结果
///
/// "A対B" 形式解析为 PairCount，"N人" 形式解析为 SingleCount，
/// 其余一律归入 Other（例如 "人数指定なし"）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOption {
    PairCount { a: u32, b: u32 },
    SingleCount { n: u32 },
    Other(String),
}

impl FilterOption {
    /// 按顺序尝试两种数字模式，都不匹配则归入 Other
    pub fn parse(label: &str) -> Self {
        if let Some(caps) = PAIR_COUNT_RE.captures(label) {
            if let (Ok(a), Ok(b)) = (caps[1].parse(), caps[2].parse()) {
                return FilterOption::PairCount { a, b };
            }
        }
        if let Some(caps) = SINGLE_COUNT_RE.captures(label) {
            if let Ok(n) = caps[1].parse() {
                return FilterOption::SingleCount { n };
            }
        }
        FilterOption::Other(label.to_string())
    }
}

/// 渲染到 select 中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

impl OptionEntry {
    fn item(label: String) -> Self {
        Self {
            value: label.clone(),
            label,
        }
    }

    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// 使用归类下拉框的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Players,
}

impl FilterField {
    /// 未选择状态的占位文言
    pub fn placeholder(&self) -> &'static str {
        match self {
            FilterField::Category => "カテゴリを選択",
            FilterField::Players => "プレイヤー数を選択",
        }
    }

    /// 后端 /get_unique_values 对应的列名
    pub fn column(&self) -> &'static str {
        match self {
            FilterField::Category => "category_title",
            FilterField::Players => "players",
        }
    }
}

/// 把后端返回的原始标签集合整理成下拉选项列表
///
/// 排序规则：PairCount 按 (a, b) 升序排最前，SingleCount 按 n 升序随后，
/// Other 按字符串顺序收尾；最前面插入一个空值占位项。重复标签原样保留。
pub fn classify(field: FilterField, raw: impl IntoIterator<Item = String>) -> Vec<OptionEntry> {
    let mut pair_counts: Vec<(u32, u32, String)> = Vec::new();
    let mut single_counts: Vec<(u32, String)> = Vec::new();
    let mut others: Vec<String> = Vec::new();

    for label in raw {
        match FilterOption::parse(&label) {
            FilterOption::PairCount { a, b } => pair_counts.push((a, b, label)),
            FilterOption::SingleCount { n } => single_counts.push((n, label)),
            FilterOption::Other(_) => others.push(label),
        }
    }

    pair_counts.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
    single_counts.sort_by(|x, y| x.0.cmp(&y.0));
    others.sort();

    let mut entries = vec![OptionEntry::placeholder(field.placeholder())];
    entries.extend(pair_counts.into_iter().map(|(_, _, label)| OptionEntry::item(label)));
    entries.extend(single_counts.into_iter().map(|(_, label)| OptionEntry::item(label)));
    entries.extend(others.into_iter().map(OptionEntry::item));
    entries
}
