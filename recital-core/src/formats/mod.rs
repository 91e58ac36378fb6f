//! Format implementations

pub mod bookmarks;
pub mod fragment;
pub mod html;

pub use bookmarks::BookmarksFormat;
pub use fragment::FragmentFormat;
pub use html::HtmlFormat;
