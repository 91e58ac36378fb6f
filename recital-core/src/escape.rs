//! HTML escaping shared by every fragment writer.

/// Escape text for use in HTML element content or a quoted attribute.
///
/// Escapes `&`, `<`, `>`, `"` and `'`, so the result is safe inside either
/// quote style.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
