//! Lesson-plan markdown to standalone HTML
//!
//!     This crate converts a small markdown dialect used to write poetry
//!     recitation lessons into HTML. Besides prose, headings, flat lists and
//!     blockquotes, the dialect has:
//!
//!     - Bookmarks: `@video <id>` / `@link <id>` declarations with `label:`,
//!       `url:` and `desc:` lines, declared once and referenced by id.
//!     - `{{video:<id>}}` on its own line: an embedded video card.
//!     - `{{link:<id>}}` anywhere in inline text: an anchor.
//!     - Fenced ```` ```video <id> ```` blocks: a video card plus "local
//!       prompts" (`task:`, `watch:`, `after:`).
//!     - `:::teacher` … `:::`: content shown only to teachers.
//!
//!     This is a pure lib: no file system, environment or stdout access.
//!     The recital-cli crate is the shell around it.
//!
//! Architecture
//!
//!     Conversion is two passes. The bookmark table is built once over the
//!     whole text (./bookmarks.rs), then the renderer walks the lines a single
//!     time (./render/mod.rs), consulting the table for every reference. The
//!     table is never touched after it is built.
//!
//!     .
//!     ├── bookmarks.rs            # Resource table builder
//!     ├── lesson.rs               # Source + bookmarks, title lookup
//!     ├── render
//!     │   ├── mod.rs              # Line classifier and block state machine
//!     │   ├── fence.rs            # Fenced video sub-parser, local prompts
//!     │   ├── video.rs            # Video cards and thumbnails
//!     │   └── inline.rs           # Reference expansion and emphasis
//!     ├── template.rs             # Page shell with {{TITLE}} / {{CONTENT}}
//!     ├── format.rs               # Format trait
//!     ├── formats                 # html, fragment, bookmarks
//!     └── registry.rs             # FormatRegistry
//!
//! Errors
//!
//!     Rendering never fails. Unknown constructs degrade to paragraphs, and a
//!     reference to an undeclared (or url-less) bookmark renders a visible
//!     "missing" marker and logs a warning. Only the format layer returns
//!     [`FormatError`].

pub mod bookmarks;
pub mod error;
pub mod escape;
pub mod format;
pub mod formats;
pub mod lesson;
pub mod registry;
pub mod render;
pub mod template;

pub use bookmarks::{Bookmarks, Resource, ResourceKind};
pub use error::FormatError;
pub use format::Format;
pub use lesson::Lesson;
pub use registry::FormatRegistry;
pub use template::Template;

/// Convert a lesson into a full page using the built-in shell.
pub fn convert(source: &str) -> String {
    formats::HtmlFormat::default().render(&Lesson::parse(source))
}
