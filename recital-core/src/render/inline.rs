//! Inline reference expansion and emphasis.
//!
//! Inline text goes through two passes, in this order:
//!
//! 1. `{{link:id}}` references are resolved against the bookmark table. Each
//!    resolved fragment is set aside and a placeholder token takes its place.
//! 2. The remaining text is escaped, emphasis is applied (code, then bold,
//!    then italic) and the placeholders are swapped back for their fragments.
//!
//! Keeping the fragments out of the text while escaping means the markup we
//! generated is never escaped, the author's text is escaped exactly once, and
//! emphasis markers inside a bookmark label are never reinterpreted.

use crate::bookmarks::{Bookmarks, ResourceKind};
use crate::escape::escape_html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Placeholder delimiters: private-use characters that escaping and emphasis
// never touch.
const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static LINK_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{link:([A-Za-z0-9_-]+)\}\}").unwrap());
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{OPEN}([0-9]+){CLOSE}")).unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Inline text whose references have been resolved and set aside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expanded {
    text: String,
    fragments: Vec<String>,
}

impl Expanded {
    /// Text with no references to protect.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fragments: Vec::new(),
        }
    }

    /// The text with placeholder tokens where fragments were.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

/// Expand references and apply emphasis in one go.
pub fn render_inline(text: &str, bookmarks: &Bookmarks) -> String {
    format_inline(&expand_references(text, bookmarks))
}

/// Replace every `{{link:id}}` with a protected anchor (or missing marker).
pub fn expand_references(text: &str, bookmarks: &Bookmarks) -> Expanded {
    let mut fragments = Vec::new();
    let text = LINK_REFERENCE
        .replace_all(text, |caps: &Captures| {
            let token = placeholder(fragments.len());
            fragments.push(inline_link(&caps[1], bookmarks));
            token
        })
        .into_owned();
    Expanded { text, fragments }
}

fn placeholder(index: usize) -> String {
    format!("{OPEN}{index}{CLOSE}")
}

/// Anchor markup for a link bookmark, or a `Missing:id` code span.
pub fn inline_link(id: &str, bookmarks: &Bookmarks) -> String {
    let Some(resource) = bookmarks.resolve(id) else {
        tracing::warn!(%id, "missing link bookmark");
        return format!("<code>Missing:{}</code>", escape_html(id));
    };
    let label = resource.label_or(ResourceKind::Link.default_label());
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
        escape_html(&resource.url),
        escape_html(label)
    )
}

/// Escape the text, apply emphasis and restore protected fragments.
pub fn format_inline(expanded: &Expanded) -> String {
    let escaped = escape_html(&expanded.text);
    let coded = CODE.replace_all(&escaped, "<code>$1</code>");
    let bolded = BOLD.replace_all(&coded, "<strong>$1</strong>");
    let emphasized = italicize(&bolded);

    PLACEHOLDER
        .replace_all(&emphasized, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| expanded.fragments.get(index))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// `*x*` → `<em>x</em>`, skipping stars that touch another star so that
/// leftover `**` pairs are never split.
fn italicize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(m) = ITALIC.find_at(text, pos) {
        let preceded = text[..m.start()].ends_with('*');
        let followed = text[m.end()..].starts_with('*');
        if preceded || followed {
            // The match always starts on an ASCII '*'.
            pos = m.start() + 1;
            continue;
        }
        out.push_str(&text[copied..m.start()]);
        out.push_str("<em>");
        out.push_str(&text[m.start() + 1..m.end() - 1]);
        out.push_str("</em>");
        copied = m.end();
        pos = m.end();
    }
    out.push_str(&text[copied..]);
    out
}
