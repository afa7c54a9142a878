// 検索フローの統合テスト
//
// 一時ディレクトリ上の SQLite にテストデータを投入し、実際の axum サーバーを
// 立ち上げて ApiClient / SearchController 経由で検索の契約を検証する。

use std::sync::Arc;

use soccer_content_search::api::{self, AppState};
use soccer_content_search::database::{ContentRepository, Database};
use soccer_content_search::external::YoutubeClient;
use soccer_content_search::models::Activity;
use soccer_content_search::services::{ActivityConverter, IngestService};
use soccer_content_search::ui::client::SearchRequest;
use soccer_content_search::ui::{
    ApiClient, ClientError, FeedbackEffect, FeedbackSubmitter, FilterField, SearchController,
};

struct TestApp {
    base_url: String,
    database: Database,
    // 一時ディレクトリはテスト終了まで保持する
    _dir: tempfile::TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let url = format!("sqlite:{}?mode=rwc", db_path.display());
    let database = Database::new_with_url(&url).await.unwrap();

    seed(&database).await;

    let state = AppState {
        database: database.clone(),
        converter: Arc::new(ActivityConverter::new(database.repository().clone())),
        ingest: Arc::new(IngestService::new(
            YoutubeClient::new(None),
            database.repository().clone(),
        )),
    };
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{}", addr),
        database,
        _dir: dir,
    }
}

/// テストデータ：
/// - ドリブル動画 12 本（分類済み、レベル初級）
/// - 対人動画 2 本（2対2、レベル中級）
/// - 未分類のドリブル動画 1 本（category 行なし）
async fn seed(database: &Database) {
    let repository = database.repository();
    let channel_id = repository
        .upsert_channel(
            "UC_regate",
            "REGATEドリブル塾",
            "https://www.youtube.com/channel/UC_regate",
        )
        .await
        .unwrap();

    for i in 1..=12 {
        let id = format!("v{:02}", i);
        let activity = Activity {
            id: id.clone(),
            title: format!("ドリブル基礎 {}", i),
            upload_date: format!("2024-01-{:02}T10:00:00Z", i),
            video_url: format!("https://www.youtube.com/watch?v={}", id),
            view_count: Some(100 * (13 - i)),
            like_count: Some(i),
            duration: Some("0:10:00".to_string()),
            channel_category: Some(channel_id),
        };
        assert!(repository.insert_activity(&activity).await.unwrap());
        repository
            .insert_category_row(&id, "ドリブル", "人数指定なし", Some("初級"), channel_id)
            .await
            .unwrap();
    }

    for i in 1..=2 {
        let id = format!("t{:02}", i);
        let activity = Activity {
            id: id.clone(),
            title: format!("2対2 対人練習 {}", i),
            upload_date: format!("2024-02-{:02}T18:30:00Z", i),
            video_url: format!("https://www.youtube.com/watch?v={}", id),
            view_count: Some(50),
            like_count: Some(5),
            duration: Some("0:08:00".to_string()),
            channel_category: Some(channel_id),
        };
        assert!(repository.insert_activity(&activity).await.unwrap());
        repository
            .insert_category_row(&id, "対人", "2対2", Some("中級"), channel_id)
            .await
            .unwrap();
    }

    // category 行を持たない動画：タイトル検索でのみ出てくる
    let uncategorized = Activity {
        id: "u01".to_string(),
        title: "ドリブル特別編".to_string(),
        upload_date: "2023-12-31T09:00:00Z".to_string(),
        video_url: "https://www.youtube.com/watch?v=u01".to_string(),
        view_count: Some(9999),
        like_count: None,
        duration: None,
        channel_category: Some(channel_id),
    };
    assert!(repository.insert_activity(&uncategorized).await.unwrap());
}

#[tokio::test]
async fn test_dropdown_sources() {
    let app = spawn_app().await;
    let client = ApiClient::new(app.base_url.clone());

    let categories = client.unique_values("category_title").await.unwrap();
    assert!(categories.contains(&"ドリブル".to_string()));
    assert!(categories.contains(&"対人".to_string()));

    // ホワイトリスト外の列は 400
    match client.unique_values("level").await {
        Err(ClientError::Status(status)) => assert_eq!(status.as_u16(), 400),
        other => panic!("expected 400 status error, got {:?}", other.map(|_| ())),
    }

    let levels = client.levels().await.unwrap();
    let mut level_names: Vec<&str> = levels.iter().map(|l| l.level.as_str()).collect();
    level_names.sort();
    assert_eq!(level_names, vec!["中級", "初級"]);

    let channels = client.channels().await.unwrap();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].channel_name, "REGATEドリブル塾");
    assert!(channels[0].channel_link.contains("UC_regate"));

    // 整理済みの選択肢リスト：先頭はプレースホルダー
    let entries = SearchController::populate_options(&client, FilterField::Players)
        .await
        .unwrap();
    assert_eq!(entries[0].label, "プレイヤー数を選択");
    assert_eq!(entries[0].value, "");
    assert_eq!(entries[1].label, "2対2");
}

#[tokio::test]
async fn test_search_and_pagination_flow() {
    let app = spawn_app().await;
    let mut controller = SearchController::new(ApiClient::new(app.base_url.clone()));

    // タイトルのみの検索：未分類動画も命中して 13 件
    controller.filters.query = "ドリブル".to_string();
    controller.run_search(true).await;

    assert_eq!(controller.pagination().total_pages(), 2);
    assert_eq!(controller.pagination().current_page(), 1);
    assert_eq!(controller.count_label(), "表示中: 10 / 13 件");
    assert!(controller.rendered().contains("class=\"card\""));
    assert!(controller.pagination().prev_disabled());
    assert!(!controller.pagination().next_disabled());

    // 2ページ目へ
    controller.go_to_page(2).await;
    assert_eq!(controller.pagination().current_page(), 2);
    assert_eq!(controller.count_label(), "表示中: 13 / 13 件");
    assert!(!controller.pagination().prev_disabled());
    assert!(controller.pagination().next_disabled());

    // 範囲外のページ指定は黙って無視される
    controller.go_to_page(0).await;
    assert_eq!(controller.pagination().current_page(), 2);
    controller.go_to_page(3).await;
    assert_eq!(controller.pagination().current_page(), 2);
}

#[tokio::test]
async fn test_category_filter_excludes_uncategorized() {
    let app = spawn_app().await;
    let mut controller = SearchController::new(ApiClient::new(app.base_url.clone()));

    controller.filters.query = "ドリブル".to_string();
    controller.filters.category = "ドリブル".to_string();
    controller.run_search(true).await;

    // category 行を持たない「ドリブル特別編」は落ちる
    assert_eq!(controller.count_label(), "表示中: 10 / 12 件");
    assert!(!controller.rendered().contains("ドリブル特別編"));
}

#[tokio::test]
async fn test_search_response_contract() {
    let app = spawn_app().await;
    let client = ApiClient::new(app.base_url.clone());

    // 再生回数順：最古の v01 が最多再生
    let response = client
        .search(&SearchRequest {
            q: "ドリブル基礎".to_string(),
            sort: "view_count".to_string(),
            limit: 3,
            offset: 0,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.total, 12);
    assert_eq!(response.current_display_count, 3);
    assert_eq!(response.activities.len(), 3);
    assert_eq!(response.activities[0].title, "ドリブル基礎 1");

    // 表示変換：埋め込みリンク・日本語日付・頻道名解決
    let first = &response.activities[0];
    assert_eq!(first.video_url, "https://www.youtube.com/embed/v01");
    assert_eq!(first.upload_date, "2024年01月01日10時00分");
    assert_eq!(first.channel_category, "REGATEドリブル塾");
    assert_eq!(first.view_count, 1200);
}

#[tokio::test]
async fn test_players_and_level_filters() {
    let app = spawn_app().await;
    let client = ApiClient::new(app.base_url.clone());

    let response = client
        .search(&SearchRequest {
            players: "2対2".to_string(),
            level: "中級".to_string(),
            limit: 10,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.total, 2);
    assert!(response
        .activities
        .iter()
        .all(|a| a.title.contains("対人練習")));
}

#[tokio::test]
async fn test_empty_results_show_prompt() {
    let app = spawn_app().await;
    let mut controller = SearchController::new(ApiClient::new(app.base_url.clone()));

    controller.filters.query = "存在しないキーワード".to_string();
    controller.run_search(true).await;

    assert!(controller.rendered().contains("検索してください"));
    assert!(!controller.rendered().contains("class=\"card\""));
    assert_eq!(controller.count_label(), "表示中: 0 / 0 件");
    assert_eq!(controller.pagination().total_pages(), 1);
    assert!(controller.pagination().prev_disabled());
    assert!(controller.pagination().next_disabled());
}

#[tokio::test]
async fn test_feedback_round_trip() {
    let app = spawn_app().await;
    let mut submitter = FeedbackSubmitter::new(ApiClient::new(app.base_url.clone()));

    submitter.form.name = "山田太郎".to_string();
    submitter.form.email = "yamada@example.com".to_string();
    submitter.form.category = "要望".to_string();
    submitter.form.message = "パス練習の動画を増やしてほしい".to_string();

    let effect = submitter.submit().await;

    assert_eq!(effect, FeedbackEffect::ConfirmationShown);
    assert!(submitter.confirmation_visible());
    assert!(submitter.form.name.is_empty());

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback WHERE name = ?")
        .bind("山田太郎")
        .fetch_one(app.database.pool())
        .await
        .unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn test_home_page_renders_populated_selects() {
    let app = spawn_app().await;

    let html = reqwest::get(&app.base_url).await.unwrap().text().await.unwrap();

    assert!(html.contains("カテゴリを選択"));
    assert!(html.contains("プレイヤー数を選択"));
    assert!(html.contains("<option value=\"ドリブル\">ドリブル</option>"));
    assert!(html.contains("REGATEドリブル塾"));
    assert!(html.contains("検索してください"));
}
