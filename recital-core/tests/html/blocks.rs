//! Block structure: lists, quotes, teacher sections, end-of-document closing.

use insta::assert_snapshot;
use recital_core::render::{render_document, render_fragments};
use recital_core::Bookmarks;

fn render(src: &str) -> String {
    render_document(src, &Bookmarks::parse(src))
}

#[test]
fn unordered_then_ordered_are_siblings() {
    assert_snapshot!(render("- a\n1. b"), @r"
    <ul>
    <li>a</li>
    </ul>
    <ol>
    <li>b</li>
    </ol>
    ");
}

#[test]
fn ordered_then_unordered_are_siblings() {
    let html = render("1. a\n* b\n2. c");
    assert_eq!(
        html,
        "<ol>\n<li>a</li>\n</ol>\n<ul>\n<li>b</li>\n</ul>\n<ol>\n<li>c</li>\n</ol>"
    );
}

#[test]
fn unclosed_teacher_section_is_closed_at_end() {
    let html = render(":::teacher\nOnly for you\n- point");
    assert_eq!(
        html,
        "<div class=\"teacher-only\">\n<p>Only for you</p>\n<ul>\n<li>point</li>\n</ul>\n</div>"
    );
}

#[test]
fn end_of_document_closes_in_order() {
    let fragments = render_fragments(":::teacher\n> quoted", &Bookmarks::default());
    assert_eq!(
        fragments,
        vec![
            "<div class=\"teacher-only\">",
            "<blockquote>",
            "<p>quoted</p>",
            "</blockquote>",
            "</div>"
        ]
    );
}

#[test]
fn heading_inside_list_run_closes_list() {
    assert_eq!(
        render("- a\n## Next\n- b"),
        "<ul>\n<li>a</li>\n</ul>\n<h2>Next</h2>\n<ul>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn paragraph_closes_quote() {
    assert_eq!(
        render(">a\nplain"),
        "<blockquote>\n<p>a</p>\n</blockquote>\n<p>plain</p>"
    );
}

#[test]
fn quote_marker_and_following_space_are_dropped() {
    assert_eq!(render(">   spaced out"), "<blockquote>\n<p>spaced out</p>\n</blockquote>");
}

#[test]
fn unclosed_fence_swallows_rest_of_document() {
    let src = "```video v\ntask: Read\n# Heading\n- item\n:::teacher";
    let fragments = render_fragments(src, &Bookmarks::default());
    assert_eq!(fragments.len(), 1);
    assert!(fragments[0].contains("<p>Read # Heading - item :::teacher</p>"));
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        render("# Title\r\n- a\r\n- b\r\n"),
        "<h1 class=\"doc-title\">Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
    );
}
