use crate::models::{ActivityRecord, Channel};
use crate::ui::options::OptionEntry;

/// 结果为空时显示的提示
pub const SEARCH_PROMPT: &str = "検索してください";

/// 卡片列表渲染：空结果显示提示文，否则最多渲染 limit 张卡片
pub fn render_cards(records: &[ActivityRecord], limit: i64) -> String {
    if records.is_empty() {
        return format!("<p class=\"search-prompt\">{}</p>", SEARCH_PROMPT);
    }

    records
        .iter()
        .take(limit.max(0) as usize)
        .map(render_card)
        .collect()
}

/// 单张结果卡片
pub fn render_card(activity: &ActivityRecord) -> String {
    format!(
        concat!(
            "<div class=\"card\">",
            "<div><strong>{title}</strong></div>",
            "<div class=\"video-container\">",
            "<iframe src=\"{video_url}\" frameborder=\"0\" allowfullscreen></iframe>",
            "</div>",
            "<div class=\"info\">",
            "<div>アップロード日: {upload_date}</div>",
            "<div>再生回数: {view_count}</div>",
            "<div>いいね: {like_count}</div>",
            "<div>動画時間: {duration}</div>",
            "<div>チャネル名: {channel}</div>",
            "</div>",
            "</div>"
        ),
        title = escape_html(&activity.title),
        video_url = escape_html(&activity.video_url),
        upload_date = escape_html(&activity.upload_date),
        view_count = activity.view_count,
        like_count = activity.like_count,
        duration = escape_html(&activity.duration),
        channel = escape_html(&activity.channel_category),
    )
}

/// "表示中: X / Y 件" 计数标签
pub fn count_label(current: i64, total: i64) -> String {
    format!("表示中: {} / {} 件", current, total)
}

/// 右栏的频道链接列表
pub fn render_channel_links(channels: &[Channel]) -> String {
    let items: String = channels
        .iter()
        .map(|channel| {
            format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
                escape_html(&channel.channel_link),
                escape_html(&channel.channel_name),
            )
        })
        .collect();
    format!("<ul>{}</ul>", items)
}

/// select 的 option 列表
pub fn render_options(entries: &[OptionEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "<option value=\"{}\">{}</option>",
                escape_html(&entry.value),
                escape_html(&entry.label),
            )
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ActivityRecord {
        ActivityRecord {
            title: title.to_string(),
            video_url: "https://www.youtube.com/embed/abc123".to_string(),
            upload_date: "2024年01月15日10時00分".to_string(),
            view_count: 1200,
            like_count: 45,
            duration: "0:12:30".to_string(),
            channel_category: "REGATEドリブル塾".to_string(),
        }
    }

    #[test]
    fn test_empty_results_render_prompt() {
        let html = render_cards(&[], 10);
        assert!(html.contains(SEARCH_PROMPT));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn test_cards_truncate_at_limit() {
        let records: Vec<ActivityRecord> = (0..5).map(|i| record(&format!("動画{}", i))).collect();
        let html = render_cards(&records, 3);
        assert_eq!(html.matches("class=\"card\"").count(), 3);
        assert!(html.contains("動画0"));
        assert!(!html.contains("動画3"));
    }

    #[test]
    fn test_card_metadata_order() {
        let html = render_card(&record("ドリブル練習"));
        let upload = html.find("アップロード日").unwrap();
        let views = html.find("再生回数").unwrap();
        let likes = html.find("いいね").unwrap();
        let duration = html.find("動画時間").unwrap();
        let channel = html.find("チャネル名").unwrap();
        assert!(upload < views && views < likes && likes < duration && duration < channel);
    }

    #[test]
    fn test_titles_are_escaped() {
        let html = render_card(&record("<script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_count_label_format() {
        assert_eq!(count_label(10, 25), "表示中: 10 / 25 件");
    }

    #[test]
    fn test_channel_links() {
        let channels = vec![Channel {
            id: 1,
            channel_name: "REGATE".to_string(),
            channel_link: "https://www.youtube.com/channel/abc".to_string(),
        }];
        let html = render_channel_links(&channels);
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains(">REGATE</a>"));
    }
}
