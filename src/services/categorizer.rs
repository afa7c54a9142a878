use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 先頭から順に評価し、最初に一致した規則で分类
    static ref CATEGORY_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\d対\d").unwrap(), "対人"),
        (Regex::new("パス").unwrap(), "パス"),
        (Regex::new("ドリブル").unwrap(), "ドリブル"),
        (Regex::new("シュート").unwrap(), "シュート"),
        (Regex::new("キック").unwrap(), "キック"),
        (Regex::new("ビルドアップ").unwrap(), "ビルドアップ"),
        (Regex::new("(GK|キーパー)").unwrap(), "キーパー"),
        (Regex::new("(守備|ディフェンス)").unwrap(), "ディフェンス"),
        (Regex::new("(フィジカル|アジリティ|ストレッチ|ラダー)").unwrap(), "フィジカル"),
        (Regex::new("(考え方|コンセプト|指導)").unwrap(), "コンセプト/考え方"),
    ];
    static ref PLAYERS_PAIR_RE: Regex = Regex::new(r"\d+対\d+").unwrap();
    static ref PLAYERS_SINGLE_RE: Regex = Regex::new(r"\d+人").unwrap();
}

pub const FALLBACK_CATEGORY: &str = "その他";
pub const NO_PLAYER_COUNT: &str = "人数指定なし";

/// 动画タイトルからカテゴリを割り当てる
pub fn assign_category(title: &str) -> &'static str {
    for (pattern, category) in CATEGORY_RULES.iter() {
        if pattern.is_match(title) {
            return category;
        }
    }
    FALLBACK_CATEGORY
}

/// タイトル中の人数表記（"A対B" / "N人"）を抜き出す。無ければ指定なし。
pub fn extract_players(title: &str) -> String {
    if let Some(m) = PLAYERS_PAIR_RE.find(title) {
        return m.as_str().to_string();
    }
    if let Some(m) = PLAYERS_SINGLE_RE.find(title) {
        return m.as_str().to_string();
    }
    NO_PLAYER_COUNT.to_string()
}
