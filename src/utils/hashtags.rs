/// Tags used when a title carries none of its own.
pub const DEFAULT_HASHTAGS: [&str; 2] = ["#YouTubeTrends", "#PopularShorts"];

/// Whitespace-delimited title tokens starting with `#`, in title order.
/// Never empty: falls back to [`DEFAULT_HASHTAGS`].
pub fn extract_hashtags(title: &str) -> Vec<String> {
    let tags: Vec<String> = title
        .split_whitespace()
        .filter(|token| token.starts_with('#'))
        .map(str::to_string)
        .collect();

    if tags.is_empty() {
        DEFAULT_HASHTAGS.iter().map(|tag| tag.to_string()).collect()
    } else {
        tags
    }
}
