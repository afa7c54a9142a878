/// 页面上的两个标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// 检索 + 结果卡片
    Search,
    /// 说明文 + 频道一览
    Info,
}

/// 标签页决定的四个布局开关
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLayout {
    pub search_hidden: bool,
    pub main_full_width: bool,
    pub paragraph_visible: bool,
    pub pagination_visible: bool,
}

/// 固定的成对策略表。只支持两个标签页，扩展需要改表。
pub fn layout_for(tab: Tab) -> TabLayout {
    match tab {
        Tab::Search => TabLayout {
            search_hidden: false,
            main_full_width: false,
            paragraph_visible: false,
            pagination_visible: true,
        },
        Tab::Info => TabLayout {
            search_hidden: true,
            main_full_width: true,
            paragraph_visible: true,
            pagination_visible: false,
        },
    }
}

/// 当前激活的标签页与其派生的 class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active: Tab,
}

impl Default for TabState {
    fn default() -> Self {
        Self { active: Tab::Search }
    }
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// 激活指定标签页（排他）并返回新的布局
    pub fn activate(&mut self, tab: Tab) -> TabLayout {
        self.active = tab;
        layout_for(tab)
    }

    pub fn layout(&self) -> TabLayout {
        layout_for(self.active)
    }

    pub fn button_class(&self, tab: Tab) -> &'static str {
        if self.active == tab {
            "tab-button active"
        } else {
            "tab-button"
        }
    }

    pub fn panel_class(&self, tab: Tab) -> &'static str {
        if self.active == tab {
            "tab-panel active"
        } else {
            "tab-panel"
        }
    }
}
