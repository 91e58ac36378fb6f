//! HTML page shell.
//!
//! A shell is plain HTML with two placeholders, `{{TITLE}}` and
//! `{{CONTENT}}`. Each is substituted once, at its first position in the
//! shell; inserted text is never scanned again.

pub const TITLE_PLACEHOLDER: &str = "{{TITLE}}";
pub const CONTENT_PLACEHOLDER: &str = "{{CONTENT}}";

/// Title used when a lesson has no level-1 heading.
pub const DEFAULT_TITLE: &str = "Poetry declamation";

const BUILTIN_SHELL: &str = include_str!("../templates/shell.html");

/// The shell a rendered lesson is placed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Wrap a shell. Missing placeholders are reported but not fatal.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        for placeholder in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
            if !text.contains(placeholder) {
                tracing::warn!(placeholder, "page template is missing a placeholder");
            }
        }
        Self { text }
    }

    /// The shell shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            text: BUILTIN_SHELL.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fill the shell. `title` is escaped here; `content` is inserted as is.
    pub fn render(&self, title: &str, content: &str) -> String {
        let title = crate::escape::escape_html(title);
        let mut slots: Vec<(usize, &str, &str)> = [
            (TITLE_PLACEHOLDER, title.as_str()),
            (CONTENT_PLACEHOLDER, content),
        ]
        .into_iter()
        .filter_map(|(placeholder, value)| {
            self.text
                .find(placeholder)
                .map(|at| (at, placeholder, value))
        })
        .collect();
        slots.sort_by_key(|(at, _, _)| *at);

        let mut out = String::with_capacity(self.text.len() + title.len() + content.len());
        let mut copied = 0;
        for (at, placeholder, value) in slots {
            out.push_str(&self.text[copied..at]);
            out.push_str(value);
            copied = at + placeholder.len();
        }
        out.push_str(&self.text[copied..]);
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::builtin()
    }
}
