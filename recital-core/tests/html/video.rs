//! Video cards, standalone and fenced.

use insta::assert_snapshot;
use recital_core::Lesson;

const BOOKMARK: &str = "@video v1\nlabel: Intro\nurl: https://youtu.be/XYZ\n\n";

#[test]
fn standalone_marker_renders_card() {
    let lesson = Lesson::parse(format!("{BOOKMARK}{{{{video:v1}}}}"));
    let body = lesson.render_body();
    let card = body.lines().last().unwrap();
    assert_snapshot!(card, @r#"<div class='video'><div class='video-top'><a class='video-thumb' href="https://youtu.be/XYZ" target="_blank" rel="noreferrer"><img alt='Video thumbnail' src="https://i.ytimg.com/vi/XYZ/hqdefault.jpg"></a><div class='video-title'><span class='tag'>Video</span> <a href="https://youtu.be/XYZ" target="_blank" rel="noreferrer"><strong>Intro</strong></a></div></div><div class='video-bottom'><p class='video-open'><a href="https://youtu.be/XYZ" target="_blank" rel="noreferrer">Open on YouTube</a></p></div></div>"#);
}

#[test]
fn watch_url_thumbnail() {
    let lesson =
        Lesson::parse("@video w\nurl: https://www.youtube.com/watch?v=abc123\n\n{{video:w}}");
    assert!(lesson
        .render_body()
        .contains("https://i.ytimg.com/vi/abc123/hqdefault.jpg"));
}

#[test]
fn missing_video_marker() {
    let lesson = Lesson::parse("{{video:<nope>}}\n{{video:nope}}");
    let body = lesson.render_body();
    // `<nope>` is not a valid id, so that line is just a paragraph.
    assert!(body.starts_with("<p>{{video:&lt;nope&gt;}}</p>"));
    assert!(body.contains("Missing bookmark: <code>nope</code>"));
}

#[test]
fn fenced_block_with_task_and_watch() {
    let lesson = Lesson::parse(format!(
        "{BOOKMARK}```video v1\ntask: Read the poem\nwatch:\n- tone\n```"
    ));
    let body = lesson.render_body();
    let stack = body.lines().last().unwrap();
    assert!(stack.starts_with("<div class='video-stack'><div class='video'>"));
    assert!(stack.ends_with(
        "<div class='local-prompts'><div class='local-prompts-title'>Local prompts</div><div class='prompt-section'><div class='prompt-title'>Task</div><p>Read the poem</p></div><div class='prompt-section'><div class='prompt-title'>Watch for</div><ul><li>tone</li></ul></div></div></div>"
    ));
}

#[test]
fn fenced_block_without_prompts_has_no_prompt_box() {
    let lesson = Lesson::parse(format!("{BOOKMARK}```video v1\n\n```\nafter"));
    let body = lesson.render_body();
    assert!(!body.contains("local-prompts"));
    assert!(body.ends_with("</div></div>\n<p>after</p>"));
}
