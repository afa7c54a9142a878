// サッカー練習動画検索サイトのバックエンドと画面層
//
// 本库提供以下功能：
// - 检索 API 与下拉选项 API 的路由
// - SQLite 上的目录数据访问
// - YouTube Data API からの取り込み
// - DOM 非依存の画面層（選択肢整理・分页・渲染・反馈）

pub mod api;
pub mod database;
pub mod external;
pub mod models;
pub mod services;
pub mod ui;
