//! Body-only output, for embedding into an existing page.

use crate::error::FormatError;
use crate::format::Format;
use crate::lesson::Lesson;

/// The rendered lesson body without any page shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentFormat;

impl Format for FragmentFormat {
    fn name(&self) -> &str {
        "fragment"
    }

    fn description(&self) -> &str {
        "Lesson body HTML without the page shell"
    }

    fn serialize(&self, lesson: &Lesson) -> Result<String, FormatError> {
        Ok(lesson.render_body())
    }
}
