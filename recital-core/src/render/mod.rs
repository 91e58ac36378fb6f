//! Block-level rendering of the lesson dialect.
//!
//! The renderer walks the document once, line by line, keeping a handful of
//! "open block" flags in [`RenderState`]. Each line is classified into a
//! [`Block`] (first match wins) and handled; fenced video blocks consume a
//! variable number of following lines, which is why the walk is index based.
//!
//! Lists and blockquotes are flat: any other block closes them. Teacher-only
//! sections are independent and only close on `:::` or at the end.

pub mod fence;
pub mod inline;
pub mod video;

use crate::bookmarks::Bookmarks;
use crate::escape::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;

pub use fence::PromptBundle;
pub use inline::render_inline;
pub use video::video_block;

static VIDEO_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\{video:([A-Za-z0-9_-]+)\}\}$").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,4})\s+(.*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());

const TEACHER_OPEN: &str = ":::teacher";
const TEACHER_CLOSE: &str = ":::";

/// What a single source line means at block level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    TeacherOpen,
    TeacherClose,
    FencedVideo(&'a str),
    Video(&'a str),
    Blank,
    Heading { level: usize, text: &'a str },
    Quote(&'a str),
    OrderedItem(&'a str),
    UnorderedItem(&'a str),
    Paragraph(&'a str),
}

/// Classify a line. The order of the checks is significant.
pub fn classify(line: &str) -> Block<'_> {
    let trimmed = line.trim();

    if trimmed == TEACHER_OPEN {
        return Block::TeacherOpen;
    }
    if trimmed == TEACHER_CLOSE {
        return Block::TeacherClose;
    }
    if let Some(id) = fence::match_opener(trimmed) {
        return Block::FencedVideo(id);
    }
    if let Some(m) = VIDEO_MARKER.captures(trimmed).and_then(|caps| caps.get(1)) {
        return Block::Video(m.as_str());
    }
    if trimmed.is_empty() {
        return Block::Blank;
    }
    if let Some(caps) = HEADING.captures(trimmed) {
        let text = caps.get(2).map_or("", |m| m.as_str());
        return Block::Heading {
            level: caps[1].len(),
            text: text.trim(),
        };
    }
    if let Some(rest) = line.trim_start().strip_prefix('>') {
        return Block::Quote(rest.trim_start());
    }
    if let Some(m) = ORDERED_ITEM.captures(trimmed).and_then(|caps| caps.get(1)) {
        return Block::OrderedItem(m.as_str().trim());
    }
    if let Some(m) = UNORDERED_ITEM.captures(trimmed).and_then(|caps| caps.get(1)) {
        return Block::UnorderedItem(m.as_str().trim());
    }
    Block::Paragraph(trimmed)
}

/// Open-block flags. At most one list kind is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    pub unordered_list: bool,
    pub ordered_list: bool,
    pub blockquote: bool,
    pub teacher: bool,
}

struct Renderer<'a> {
    bookmarks: &'a Bookmarks,
    state: RenderState,
    out: Vec<String>,
}

impl<'a> Renderer<'a> {
    fn new(bookmarks: &'a Bookmarks) -> Self {
        Self {
            bookmarks,
            state: RenderState::default(),
            out: Vec::new(),
        }
    }

    fn emit(&mut self, fragment: impl Into<String>) {
        self.out.push(fragment.into());
    }

    fn close_unordered(&mut self) {
        if self.state.unordered_list {
            self.emit("</ul>");
            self.state.unordered_list = false;
        }
    }

    fn close_ordered(&mut self) {
        if self.state.ordered_list {
            self.emit("</ol>");
            self.state.ordered_list = false;
        }
    }

    fn close_lists(&mut self) {
        self.close_unordered();
        self.close_ordered();
    }

    fn close_blockquote(&mut self) {
        if self.state.blockquote {
            self.emit("</blockquote>");
            self.state.blockquote = false;
        }
    }

    fn close_blocks(&mut self) {
        self.close_lists();
        self.close_blockquote();
    }

    fn close_teacher(&mut self) {
        if self.state.teacher {
            self.emit("</div>");
            self.state.teacher = false;
        }
    }

    fn run(mut self, source: &str) -> Vec<String> {
        let lines: Vec<&str> = source.lines().collect();
        let mut i = 0;

        while i < lines.len() {
            let block = classify(lines[i]);
            i += 1;

            match block {
                Block::TeacherOpen => {
                    self.close_blocks();
                    if !self.state.teacher {
                        self.emit(r#"<div class="teacher-only">"#);
                        self.state.teacher = true;
                    }
                }
                Block::TeacherClose => {
                    self.close_blocks();
                    self.close_teacher();
                }
                Block::FencedVideo(id) => {
                    self.close_blocks();
                    let (prompts, next) = fence::collect_prompts(&lines, i);
                    i = next;
                    let html = fence::video_stack(id, &prompts, self.bookmarks);
                    self.emit(html);
                }
                Block::Video(id) => {
                    self.close_blocks();
                    let html = video_block(id, self.bookmarks);
                    self.emit(html);
                }
                Block::Blank => self.close_blocks(),
                Block::Heading { level, text } => {
                    self.close_blocks();
                    let class = if level == 1 { r#" class="doc-title""# } else { "" };
                    self.emit(format!(
                        "<h{level}{class}>{}</h{level}>",
                        escape_html(text)
                    ));
                }
                Block::Quote(text) => {
                    self.close_lists();
                    if !self.state.blockquote {
                        self.emit("<blockquote>");
                        self.state.blockquote = true;
                    }
                    let html = render_inline(text, self.bookmarks);
                    self.emit(format!("<p>{html}</p>"));
                }
                Block::OrderedItem(text) => {
                    self.close_blockquote();
                    self.close_unordered();
                    if !self.state.ordered_list {
                        self.emit("<ol>");
                        self.state.ordered_list = true;
                    }
                    let html = render_inline(text, self.bookmarks);
                    self.emit(format!("<li>{html}</li>"));
                }
                Block::UnorderedItem(text) => {
                    self.close_blockquote();
                    self.close_ordered();
                    if !self.state.unordered_list {
                        self.emit("<ul>");
                        self.state.unordered_list = true;
                    }
                    let html = render_inline(text, self.bookmarks);
                    self.emit(format!("<li>{html}</li>"));
                }
                Block::Paragraph(text) => {
                    self.close_blocks();
                    let html = render_inline(text, self.bookmarks);
                    self.emit(format!("<p>{html}</p>"));
                }
            }
        }

        self.close_lists();
        self.close_blockquote();
        self.close_teacher();

        tracing::debug!(lines = lines.len(), fragments = self.out.len(), "rendered lesson body");
        self.out
    }
}

/// Render a document into its HTML block fragments, in order.
pub fn render_fragments(source: &str, bookmarks: &Bookmarks) -> Vec<String> {
    Renderer::new(bookmarks).run(source)
}

/// Render a document body; fragments are separated by newlines.
pub fn render_document(source: &str, bookmarks: &Bookmarks) -> String {
    render_fragments(source, bookmarks).join("\n")
}
