//! Format trait definition
//!
//! Every output the toolchain can produce from a [`Lesson`] is a [`Format`]:
//! the full HTML page, the bare body fragment, or the bookmark table as JSON.

use crate::error::FormatError;
use crate::lesson::Lesson;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct WordCount;
///
/// impl Format for WordCount {
///     fn name(&self) -> &str {
///         "words"
///     }
///
///     fn serialize(&self, lesson: &Lesson) -> Result<String, FormatError> {
///         Ok(lesson.source().split_whitespace().count().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "fragment")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a lesson into this format
    fn serialize(&self, lesson: &Lesson) -> Result<String, FormatError>;

    /// Render a lesson with extra, format-specific parameters.
    ///
    /// The default implementation accepts only an empty option map and
    /// delegates to [`Format::serialize`].
    fn serialize_with_options(
        &self,
        lesson: &Lesson,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(lesson)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
