// 画面层：浏览器端逻辑的纯 Rust 表达
//
// DOM 耦合被拆掉之后剩下的部分：选项归类、分页状态、检索控制、
// 卡片渲染、标签页策略、反馈提交。纯逻辑不做任何 I/O，
// 网络交互集中在 ApiClient。

pub mod client;
pub mod controller;
pub mod feedback;
pub mod options;
pub mod pagination;
pub mod render;
pub mod tabs;

pub use client::{ApiClient, ClientError};
pub use controller::{FilterState, SearchController};
pub use feedback::{FeedbackEffect, FeedbackForm, FeedbackSubmitter};
pub use options::{classify, FilterField, FilterOption, OptionEntry};
pub use pagination::PaginationState;
pub use tabs::{Tab, TabLayout, TabState};
