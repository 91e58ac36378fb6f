use recital_core::{FormatRegistry, Lesson};

const KITCHENSINK: &str = include_str!("fixtures/kitchensink.md");

fn body() -> String {
    Lesson::parse(KITCHENSINK).render_body()
}

#[test]
fn declares_every_bookmark() {
    let lesson = Lesson::parse(KITCHENSINK);
    let ids: Vec<&str> = lesson.bookmarks().iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["poem-watch", "raven", "rubric", "text"]);
}

#[test]
fn title_comes_from_first_heading() {
    let lesson = Lesson::parse(KITCHENSINK);
    assert_eq!(lesson.title(), Some("Poetry Recitation: Poe"));

    let page = FormatRegistry::default().serialize(&lesson, "html").unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Poetry Recitation: Poe</title>"));
    assert!(!page.contains("{{CONTENT}}"));
}

#[test]
fn headings_at_every_level() {
    let html = body();
    assert!(html.contains("<h1 class=\"doc-title\">Poetry Recitation: Poe</h1>"));
    assert!(html.contains("<h2>Warm-up</h2>"));
    assert!(html.contains("<h3>Notes for the teacher</h3>"));
    assert!(html.contains("<h4>Wrap-up</h4>"));
}

#[test]
fn prose_with_emphasis_and_link() {
    let html = body();
    assert!(html.contains(
        "<p>Read the first stanza <strong>silently</strong>, then <em>aloud</em>. See <a href=\"https://example.com/raven?ed=1&amp;lang=en\" target=\"_blank\" rel=\"noreferrer\">Full text of *The Raven*</a>.</p>"
    ));
}

#[test]
fn lists_and_quote() {
    let html = body();
    assert!(html.contains(
        "<ol>\n<li>Breathe in for four counts</li>\n<li>Read the first line</li>\n<li>Pause at the comma</li>\n</ol>"
    ));
    assert!(html.contains("<ul>\n<li>Keep your chin up</li>\n<li>Look at the audience</li>\n</ul>"));
    assert!(html.contains(
        "<blockquote>\n<p>Once upon a midnight dreary, while I pondered, weak &amp; weary,</p>\n<p>Over many a quaint and curious volume of forgotten lore</p>\n</blockquote>"
    ));
}

#[test]
fn standalone_video_card() {
    let html = body();
    assert!(html.contains("src=\"https://i.ytimg.com/vi/R4v3n/hqdefault.jpg\""));
    assert!(html.contains("<strong>The Raven, read aloud</strong>"));
    assert!(html.contains("<p class='video-desc'>A slow, dramatic reading. Note the pauses.</p>"));
}

#[test]
fn teacher_section() {
    let html = body();
    let start = html.find("<div class=\"teacher-only\">").expect("teacher section");
    let section = &html[start..];
    assert!(section.contains("<p>Grade with <a href=\"/rubrics/recitation.pdf\" target=\"_blank\" rel=\"noreferrer\">Link</a>; ignore <code>Missing:draft</code>.</p>"));
    assert!(section.contains("<ul>\n<li>Watch for <code>rushing</code></li>\n</ul>\n</div>"));
}

#[test]
fn fenced_blocks() {
    let html = body();
    assert!(html.contains("vi/Ann4b3l/hqdefault.jpg"));
    assert!(html.contains("<p>Listen to the whole poem once. Then pick your favourite stanza.</p>"));
    assert!(html.contains("<ul><li>rhythm</li><li>how the reader handles the refrain</li></ul>"));
    assert!(html.contains("<ul><li>Recite your stanza to a partner</li></ul>"));
    assert!(html.contains(
        "<div class='video-stack'><div class='video'><div class='video-top'><div class='video-title'><span class='tag'>Video</span> Missing bookmark: <code>missing-one</code></div></div></div></div>"
    ));
}

#[test]
fn trailing_paragraph_is_escaped() {
    assert!(body().ends_with("<h4>Wrap-up</h4>\n<p>Questions? Ask &lt; 5 minutes before the bell.</p>"));
}

#[test]
fn declarations_render_as_prose() {
    let html = body();
    assert!(html.starts_with("<p>@video raven</p>\n<p>label: The Raven, read aloud</p>"));
}

#[test]
fn conversion_is_deterministic() {
    assert_eq!(body(), body());
}
