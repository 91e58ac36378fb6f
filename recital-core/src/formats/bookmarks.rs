//! Bookmark table export.

use crate::error::FormatError;
use crate::format::Format;
use crate::lesson::Lesson;

/// The lesson's bookmark table as pretty-printed JSON, keyed by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookmarksFormat;

impl Format for BookmarksFormat {
    fn name(&self) -> &str {
        "bookmarks"
    }

    fn description(&self) -> &str {
        "Declared video and link bookmarks as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, lesson: &Lesson) -> Result<String, FormatError> {
        serde_json::to_string_pretty(lesson.bookmarks())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
