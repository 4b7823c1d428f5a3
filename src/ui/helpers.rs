//! Shared markup helpers.

use std::ops::Range;

/// Escapes text for use in HTML element content and attribute values.
///
/// # Example
///
/// ```rust
/// use docnav::ui::helpers::escape_html;
///
/// assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

/// Escapes `title`, wrapping the highlighted byte range in `<mark>`.
///
/// Ranges that do not fall on character boundaries are ignored.
#[must_use]
pub fn highlighted_title(title: &str, highlight: Option<&Range<usize>>) -> String {
    let Some(range) = highlight.filter(|r| title.get((*r).clone()).is_some()) else {
        return escape_html(title);
    };

    format!(
        "{}<mark>{}</mark>{}",
        escape_html(&title[..range.start]),
        escape_html(&title[range.clone()]),
        escape_html(&title[range.end..])
    )
}
