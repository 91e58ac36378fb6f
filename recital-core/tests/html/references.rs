//! Inline `{{link:id}}` references inside block content.

use recital_core::Lesson;

#[test]
fn link_without_label_uses_default() {
    let lesson = Lesson::parse("@link l1\nurl: https://example.com\n\nSee {{link:l1}} now");
    assert!(lesson.render_body().ends_with(
        "<p>See <a href=\"https://example.com\" target=\"_blank\" rel=\"noreferrer\">Link</a> now</p>"
    ));
}

#[test]
fn missing_link_in_list_item() {
    let lesson = Lesson::parse("- read {{link:nope}} & <b>");
    assert_eq!(
        lesson.render_body(),
        "<ul>\n<li>read <code>Missing:nope</code> &amp; &lt;b&gt;</li>\n</ul>"
    );
}

#[test]
fn link_inside_blockquote() {
    let lesson = Lesson::parse("@link src\nlabel: Source\nurl: /s\n\n> from {{link:src}}");
    assert!(lesson.render_body().ends_with(
        "<blockquote>\n<p>from <a href=\"/s\" target=\"_blank\" rel=\"noreferrer\">Source</a></p>\n</blockquote>"
    ));
}

#[test]
fn several_links_on_one_line() {
    let lesson = Lesson::parse("@link a\nurl: /a\n@link b\nlabel: B\nurl: /b\n\n{{link:a}} and {{link:b}}");
    let body = lesson.render_body();
    assert!(body.ends_with(
        "<p><a href=\"/a\" target=\"_blank\" rel=\"noreferrer\">Link</a> and <a href=\"/b\" target=\"_blank\" rel=\"noreferrer\">B</a></p>"
    ));
}

#[test]
fn headings_do_not_expand_references() {
    let lesson = Lesson::parse("@link a\nurl: /a\n\n## See {{link:a}}");
    assert!(lesson.render_body().ends_with("<h2>See {{link:a}}</h2>"));
}

#[test]
fn redeclared_id_changes_kind() {
    let lesson = Lesson::parse("@video x\nurl: https://youtu.be/abc\n@link x\nurl: /x\n\n{{link:x}}\n{{video:x}}");
    let body = lesson.render_body();
    assert!(body.contains("<a href=\"/x\" target=\"_blank\" rel=\"noreferrer\">Link</a>"));
    // The card still renders from the link entry; it just has no thumbnail.
    assert!(body.contains("<strong>Video</strong>"));
    assert!(!body.contains("video-thumb"));
}
