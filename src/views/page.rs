use crate::config::UiConfig;
use crate::utils::escape_html;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0 auto; padding: 1rem 2rem; }
.layout-wide { max-width: none; }
.layout-centered { max-width: 46rem; }
section { border-bottom: 1px solid #ddd; padding: 1rem 0; }
.result { border-left: 3px solid #f33; margin: .75rem 0; padding-left: .75rem; }
.warning { background: #fff6d5; padding: .75rem; }
.error { background: #fde2e1; padding: .75rem; }
.success { background: #e1f6e4; padding: .75rem; }
.htmx-indicator { display: none; color: #666; }
.htmx-request .htmx-indicator, .htmx-request.htmx-indicator { display: block; }
"#;

struct KeywordSection {
    id: &'static str,
    heading: &'static str,
    label: &'static str,
    button: &'static str,
    /// What the indicator says is being searched for, after the keyword.
    searching: &'static str,
}

const KEYWORD_SECTIONS: [KeywordSection; 3] = [
    KeywordSection {
        id: "trends",
        heading: "🔥 YouTube Shorts Trend Analysis",
        label: "🔍 Enter a keyword to find popular shorts",
        button: "📈 Analyze shorts trends",
        searching: "popular shorts",
    },
    KeywordSection {
        id: "seo",
        heading: "🔍 YouTube SEO Analysis",
        label: "🔍 Enter a keyword to analyze top search results",
        button: "📊 Start SEO analysis",
        searching: "popular videos",
    },
    KeywordSection {
        id: "competitors",
        heading: "📊 YouTube Competitor Analysis",
        label: "🔍 Enter a keyword to find competitor channels",
        button: "🏆 Recommend competitor channels",
        searching: "similar channels",
    },
];

fn keyword_section(section: &KeywordSection) -> String {
    format!(
        r##"<section id="{id}">
  <h2>{heading}</h2>
  <form hx-post="/api/{id}" hx-target="#{id}-result" hx-indicator="#{id}-indicator"
        hx-on::before-request="document.getElementById('{id}-keyword').textContent = this.elements.keyword.value.trim()">
    <label>{label}<br><input type="text" name="keyword" maxlength="200" required></label>
    <button type="submit">{button}</button>
  </form>
  <div id="{id}-indicator" class="htmx-indicator">⏳ Searching for '<span id="{id}-keyword"></span>' {searching}...</div>
  <div id="{id}-result"></div>
</section>"##,
        id = section.id,
        heading = section.heading,
        label = section.label,
        button = section.button,
        searching = section.searching,
    )
}

fn earnings_section(default_cpm: f64) -> String {
    format!(
        r##"<section id="earnings">
  <h2>💰 YouTube Earnings Estimator</h2>
  <form hx-post="/api/earnings" hx-target="#earnings-result">
    <label>📊 Expected views (e.g. 1000000)<br><input type="number" name="views" min="0" step="1" value="0" required></label>
    <label>CPM ($ per 1000 views)<br><input type="number" name="cpm" min="0.01" step="0.01" placeholder="{default_cpm:.2}"></label>
    <button type="submit">💵 Estimate earnings</button>
  </form>
  <div id="earnings-result"></div>
</section>"##
    )
}

fn tips_section() -> &'static str {
    r##"<section id="tips">
  <h2>🎯 YouTube Video Optimization Guide</h2>
  <button hx-post="/api/tips" hx-target="#tips-result">📢 Show optimization tips</button>
  <div id="tips-result"></div>
</section>"##
}

/// The full dashboard. Rendered once per page load; every section swaps in
/// its own fragment afterwards.
pub fn dashboard(ui: &UiConfig, default_cpm: f64) -> String {
    let sections: String = KEYWORD_SECTIONS
        .iter()
        .take(2)
        .map(keyword_section)
        .chain(std::iter::once(earnings_section(default_cpm)))
        .chain(KEYWORD_SECTIONS.iter().skip(2).map(keyword_section))
        .chain(std::iter::once(tips_section().to_string()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{htmx}"></script>
<style>{style}</style>
</head>
<body class="{layout}">
<h1>📊 YouTube Creator &amp; Shorts Analytics</h1>
{sections}
</body>
</html>"#,
        title = escape_html(&ui.page_title),
        htmx = HTMX_SRC,
        style = STYLE,
        layout = ui.layout.css_class(),
        sections = sections,
    )
}
