/// Descriptions keep at most this many characters.
pub const DESCRIPTION_LIMIT: usize = 200;
pub const ELLIPSIS: &str = "...";

/// The first `limit` characters of `text` followed by [`ELLIPSIS`].
pub fn truncate_chars(text: &str, limit: usize) -> String {
    let end = text
        .char_indices()
        .nth(limit)
        .map_or(text.len(), |(byte_idx, _)| byte_idx);
    format!("{}{}", &text[..end], ELLIPSIS)
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
