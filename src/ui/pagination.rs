/// 分页状态
///
/// 不变式：current_page ≥ 1、total_pages ≥ 1。页码越界的跳转请求
/// 直接忽略，总页数缩小时不强制移动当前页，只靠按钮禁用来约束。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// 回到第一页（新的检索开始时）
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// 根据检索响应的总件数重新计算总页数
    pub fn apply_total(&mut self, total: i64, limit: i64) {
        let total = total.max(0);
        let limit = limit.max(1);
        self.total_pages = ((total + limit - 1) / limit).max(1) as u32;
    }

    /// 页码有效则跳转并返回 true，越界则不变并返回 false
    pub fn try_go_to(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page == 1 || self.total_pages == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages || self.total_pages == 1
    }
}
