//! A parsed lesson: source text plus its bookmark table.

use crate::bookmarks::Bookmarks;
use crate::render;

/// A lesson document ready to render.
///
/// The bookmark table is built once, up front, and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    source: String,
    bookmarks: Bookmarks,
}

impl Lesson {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let bookmarks = Bookmarks::parse(&source);
        Self { source, bookmarks }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    /// Text of the first `# ` heading anywhere in the document.
    pub fn title(&self) -> Option<&str> {
        self.source.lines().find_map(|line| {
            let rest = line.strip_prefix('#')?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let title = rest.trim();
            (!title.is_empty()).then_some(title)
        })
    }

    /// The rendered body fragments, newline separated.
    pub fn render_body(&self) -> String {
        render::render_document(&self.source, &self.bookmarks)
    }
}
