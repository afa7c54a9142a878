use crate::models::SearchResponse;
use crate::ui::client::{ApiClient, SearchRequest};
use crate::ui::options::{classify, FilterField, OptionEntry};
use crate::ui::pagination::PaginationState;
use crate::ui::render;

/// 上限固定的每页件数
pub const MAX_LIMIT: i64 = 10;
pub const DEFAULT_LIMIT: i64 = 10;

/// 画面上的筛选输入。全部保持原始字符串，空串表示未选择。
#[derive(Debug, Clone)]
pub struct FilterState {
    pub query: String,
    pub category: String,
    pub players: String,
    pub level: String,
    pub channel: String,
    pub sort: String,
    pub limit_input: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            players: String::new(),
            level: String::new(),
            channel: String::new(),
            sort: "upload_date".to_string(),
            limit_input: DEFAULT_LIMIT.to_string(),
        }
    }
}

/// 检索控制器
///
/// 分页状态与渲染结果都是实例字段，不依赖任何全局量。检索失败时
/// 只记录日志，已渲染的卡片与分页状态保持原样。
pub struct SearchController {
    client: ApiClient,
    pub filters: FilterState,
    pagination: PaginationState,
    rendered: String,
    count_label: String,
}

impl SearchController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            filters: FilterState::default(),
            pagination: PaginationState::new(),
            // 初始画面：提示文言
            rendered: render::render_cards(&[], DEFAULT_LIMIT),
            count_label: String::new(),
        }
    }

    /// 每页件数の解釈：数値でない・0以下 → 10、10超 → 10
    pub fn parse_limit(input: &str) -> i64 {
        match input.trim().parse::<i64>() {
            Ok(n) if n > 0 => n.min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        }
    }

    pub fn limit(&self) -> i64 {
        Self::parse_limit(&self.filters.limit_input)
    }

    /// 当前筛选状态与页码组装的请求参数
    pub fn build_request(&self) -> SearchRequest {
        let limit = self.limit();
        SearchRequest {
            q: self.filters.query.clone(),
            category: self.filters.category.clone(),
            players: self.filters.players.clone(),
            level: self.filters.level.clone(),
            channel: self.filters.channel.clone(),
            sort: self.filters.sort.clone(),
            limit,
            offset: (self.pagination.current_page() as i64 - 1) * limit,
        }
    }

    /// 执行检索。reset_page 为 true 时先回到第一页。
    pub async fn run_search(&mut self, reset_page: bool) {
        if reset_page {
            self.pagination.reset();
        }

        let request = self.build_request();
        match self.client.search(&request).await {
            Ok(response) => self.apply_response(response),
            Err(e) => {
                // 失败时画面不更新
                tracing::error!("Search request failed: {}", e);
            }
        }
    }

    /// 把一次检索响应反映到画面状态。多个请求并发时，
    /// 最后应用的响应决定最终画面（last-response-wins）。
    pub fn apply_response(&mut self, response: SearchResponse) {
        let limit = self.limit();
        self.rendered = render::render_cards(&response.activities, limit);
        self.pagination.apply_total(response.total, limit);
        self.count_label = render::count_label(response.current_display_count, response.total);
    }

    /// 页码跳转。越界则什么都不做，有效则以该页重新检索。
    pub async fn go_to_page(&mut self, page: u32) {
        if !self.pagination.try_go_to(page) {
            return;
        }
        self.run_search(false).await;
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn count_label(&self) -> &str {
        &self.count_label
    }

    /// カテゴリが「対人」以外のときプレイヤー数セレクトは無効
    pub fn players_select_disabled(category_value: &str) -> bool {
        category_value != "対人"
    }

    /// 把后端的去重标签取回并整理成下拉选项。
    /// 取得失败时记录日志并返回 None，画面保持原状。
    pub async fn populate_options(
        client: &ApiClient,
        field: FilterField,
    ) -> Option<Vec<OptionEntry>> {
        match client.unique_values(field.column()).await {
            Ok(values) => Some(classify(field, values)),
            Err(e) => {
                tracing::error!("Failed to load {} options: {}", field.column(), e);
                None
            }
        }
    }
}
