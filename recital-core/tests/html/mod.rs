//! HTML output tests
//!
//! Lesson dialect → HTML, checked on fragments and on whole pages.

mod blocks;
mod kitchensink;
mod references;
mod video;
