use axum::{extract::State, response::Html};

use super::error::ApiResult;
use super::AppState;
use crate::database::ContentRepository;
use crate::models::FilterColumn;
use crate::ui::options::{classify, FilterField, OptionEntry};
use crate::ui::render;
use crate::ui::tabs::{Tab, TabState};

/// ホームページ。select は初期表示時点でサーバー側で埋めておく。
pub async fn home(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let repository = state.database.repository();

    let categories = repository.distinct_values(FilterColumn::CategoryTitle).await?;
    let players = repository.distinct_values(FilterColumn::Players).await?;
    let levels = repository.get_levels().await?;
    let channels = repository.get_channels().await?;

    let category_options = render::render_options(&classify(FilterField::Category, categories));
    let players_options = render::render_options(&classify(FilterField::Players, players));

    let level_entries: Vec<OptionEntry> = std::iter::once(OptionEntry {
        value: String::new(),
        label: "レベルを選択".to_string(),
    })
    .chain(levels.iter().map(|l| OptionEntry {
        value: l.level.clone(),
        label: l.level.clone(),
    }))
    .collect();
    let level_options = render::render_options(&level_entries);

    let channel_entries: Vec<OptionEntry> = std::iter::once(OptionEntry {
        value: String::new(),
        label: "チャネルを選択".to_string(),
    })
    .chain(channels.iter().map(|c| OptionEntry {
        value: c.id.to_string(),
        label: c.channel_name.clone(),
    }))
    .collect();
    let channel_options = render::render_options(&channel_entries);

    let channel_links = render::render_channel_links(&channels);

    let tabs = TabState::new();
    let layout = tabs.layout();

    let page = format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"ja\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>サッカー練習動画検索</title>\n",
            "</head>\n",
            "<body>\n",
            "<div class=\"tab-bar\">\n",
            "<button class=\"{search_button_class}\" data-tab=\"tab1\">検索</button>\n",
            "<button class=\"{info_button_class}\" data-tab=\"tab2\">サイトについて</button>\n",
            "</div>\n",
            "<div class=\"search-container{search_hidden}\">\n",
            "<input id=\"search-input\" type=\"text\" placeholder=\"キーワード\">\n",
            "<select id=\"type-input\">{category_options}</select>\n",
            "<select id=\"players-input\" disabled>{players_options}</select>\n",
            "<select id=\"level-input\">{level_options}</select>\n",
            "<select id=\"channel-input\">{channel_options}</select>\n",
            "<select id=\"sort-input\">\n",
            "<option value=\"upload_date\">アップロード日順</option>\n",
            "<option value=\"view_count\">再生回数順</option>\n",
            "<option value=\"like_count\">いいね順</option>\n",
            "</select>\n",
            "<input id=\"limit-input\" type=\"number\" min=\"1\" max=\"10\" value=\"10\">\n",
            "<button id=\"search-button\">検索</button>\n",
            "</div>\n",
            "<div class=\"main-content{main_full_width}\">\n",
            "<div id=\"video-count\"></div>\n",
            "<div class=\"card-container\"></div>\n",
            "<p id=\"search-prompt\">{search_prompt}</p>\n",
            "</div>\n",
            "<div class=\"pagination\" style=\"display: {pagination_display}\">\n",
            "<button id=\"prev-page\" disabled>前へ</button>\n",
            "<span id=\"current-page\">1</span>\n",
            "<button id=\"next-page\" disabled>次へ</button>\n",
            "</div>\n",
            "<div class=\"paragraph-container\" style=\"display: {paragraph_display}\">\n",
            "<div class=\"right-half\">{channel_links}</div>\n",
            "</div>\n",
            "<form id=\"feedbackForm\">\n",
            "<input id=\"name\" type=\"text\" placeholder=\"お名前\">\n",
            "<input id=\"email\" type=\"email\" placeholder=\"メールアドレス\">\n",
            "<input id=\"category\" type=\"text\" placeholder=\"種別\">\n",
            "<textarea id=\"message\" placeholder=\"ご意見・ご要望\"></textarea>\n",
            "<button type=\"submit\">送信</button>\n",
            "</form>\n",
            "<p id=\"responseMessage\" class=\"hidden\">ご意見ありがとうございました。</p>\n",
            "</body>\n",
            "</html>\n"
        ),
        search_button_class = tabs.button_class(Tab::Search),
        info_button_class = tabs.button_class(Tab::Info),
        search_hidden = if layout.search_hidden { " hidden" } else { "" },
        main_full_width = if layout.main_full_width { " full-width" } else { "" },
        pagination_display = if layout.pagination_visible { "block" } else { "none" },
        paragraph_display = if layout.paragraph_visible { "block" } else { "none" },
        search_prompt = render::SEARCH_PROMPT,
        category_options = category_options,
        players_options = players_options,
        level_options = level_options,
        channel_options = channel_options,
        channel_links = channel_links,
    );

    Ok(Html(page))
}
