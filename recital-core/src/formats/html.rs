//! Standalone HTML page output.
//!
//! The lesson body is placed into a [`Template`] shell. The page title is
//! the lesson's first level-1 heading, falling back to a configurable
//! default.
//!
//! Options accepted by [`Format::serialize_with_options`]:
//!
//! | Key        | Meaning                                              |
//! |------------|------------------------------------------------------|
//! | `title`    | Default title when the lesson has no `# ` heading    |
//! | `template` | Shell text replacing the current template            |

use crate::error::FormatError;
use crate::format::Format;
use crate::lesson::Lesson;
use crate::template::{Template, DEFAULT_TITLE};
use std::collections::HashMap;

/// Format implementation for full HTML pages
#[derive(Debug, Clone)]
pub struct HtmlFormat {
    template: Template,
    default_title: String,
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self::new(Template::builtin())
    }
}

impl HtmlFormat {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            default_title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Render a lesson into the page shell.
    pub fn render(&self, lesson: &Lesson) -> String {
        let title = lesson.title().unwrap_or(self.default_title.as_str());
        self.template.render(title, &lesson.render_body())
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Standalone HTML page"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, lesson: &Lesson) -> Result<String, FormatError> {
        Ok(self.render(lesson))
    }

    fn serialize_with_options(
        &self,
        lesson: &Lesson,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut format = self.clone();
        for (key, value) in options {
            match key.as_str() {
                "title" => format.default_title = value.clone(),
                "template" => format.template = Template::new(value.clone()),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' has no option '{other}'"
                    )))
                }
            }
        }
        Ok(format.render(lesson))
    }
}
