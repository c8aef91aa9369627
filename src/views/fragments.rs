use std::fmt::Write;

use crate::models::{CompetitorChannel, EarningsEstimate, SeoVideo, TrendingVideo};
use crate::utils::{escape_html, format_count, format_dollars};

pub const NO_TRENDS: &str = "❌ No trending shorts found.";
pub const NO_SEO_RESULTS: &str = "❌ No SEO analysis results found.";
pub const NO_COMPETITORS: &str = "❌ No competitor channels found.";

pub fn warning(message: &str) -> String {
    format!(r#"<div class="warning">{}</div>"#, escape_html(message))
}

pub fn error(message: &str, details: &str) -> String {
    format!(
        r#"<div class="error"><p>{}</p><pre>{}</pre></div>"#,
        escape_html(message),
        escape_html(details)
    )
}

fn link(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
        escape_html(url),
        escape_html(label)
    )
}

pub fn trends(videos: &[TrendingVideo]) -> String {
    if videos.is_empty() {
        return warning(NO_TRENDS);
    }

    let mut html = String::new();
    for video in videos {
        let _ = write!(
            html,
            concat!(
                r#"<div class="result">"#,
                "<p>🎬 <strong>{}</strong></p>",
                "<p>🔗 {}</p>",
                "<p>👀 Views: {}</p>",
                "<p>🏷 Hashtags: {}</p>",
                "</div>"
            ),
            escape_html(&video.title),
            link(&video.url, &video.url),
            format_count(video.view_count),
            escape_html(&video.hashtags.join(" ")),
        );
    }
    html
}

pub fn seo(videos: &[SeoVideo]) -> String {
    if videos.is_empty() {
        return warning(NO_SEO_RESULTS);
    }

    let mut html = String::new();
    for video in videos {
        let _ = write!(
            html,
            concat!(
                r#"<div class="result">"#,
                "<p>🎬 <strong>{}</strong></p>",
                "<p>🔗 {}</p>",
                "<p>📊 Views: {}</p>",
                "<p>📝 Description: {}</p>",
                "</div>"
            ),
            escape_html(&video.title),
            link(&video.url, &video.url),
            format_count(video.view_count),
            escape_html(&video.description),
        );
    }
    html
}

pub fn competitors(channels: &[CompetitorChannel]) -> String {
    if channels.is_empty() {
        return warning(NO_COMPETITORS);
    }

    channels
        .iter()
        .map(|channel| format!("<p>📺 {}</p>", link(&channel.url, &channel.name)))
        .collect()
}

pub fn earnings(estimate: &EarningsEstimate) -> String {
    format!(
        r#"<div class="success">📢 Estimated YouTube earnings: {} <small>({} views at ${:.2} CPM)</small></div>"#,
        format_dollars(estimate.earnings),
        format_count(estimate.views),
        estimate.cpm,
    )
}

pub fn tips(tips: &[&str]) -> String {
    tips.iter()
        .map(|tip| format!("<p>{}</p>", escape_html(tip)))
        .collect()
}
