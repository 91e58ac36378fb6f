//! Fenced video blocks and their local prompts.
//!
//! ````text
//! ```video intro
//! task: Read the poem aloud once
//!   before watching.
//! watch: pacing
//! - tone
//! after:
//! - Record yourself
//! ```
//! ````
//!
//! The block pairs a video bookmark with three optional prompt sections. A
//! block that is never closed runs to the end of the document.

use crate::bookmarks::Bookmarks;
use crate::render::inline::render_inline;
use crate::render::video::video_block;
use once_cell::sync::Lazy;
use regex::Regex;

static OPENER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```video\s+([A-Za-z0-9_-]+)$").unwrap());
static PROMPT_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(task|watch|after)\s*:\s*(.*)$").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s+(.*)$").unwrap());

const FENCE: &str = "```";

/// Prompts collected from one fenced block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptBundle {
    pub task: String,
    pub watch: Vec<String>,
    pub after: Vec<String>,
}

impl PromptBundle {
    pub fn is_empty(&self) -> bool {
        self.task.trim().is_empty() && self.watch.is_empty() && self.after.is_empty()
    }

    fn append_task(&mut self, line: &str) {
        let current = self.task.trim();
        self.task = if current.is_empty() {
            line.to_string()
        } else {
            format!("{current} {line}")
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Task,
    Watch,
    After,
}

/// The bookmark id of a ```` ```video <id> ```` opener line.
pub fn match_opener(line: &str) -> Option<&str> {
    OPENER
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Collect prompts from `lines[start..]` up to the closing fence.
///
/// Returns the bundle and the index of the first line after the block; the
/// closing fence itself is consumed.
pub fn collect_prompts(lines: &[&str], start: usize) -> (PromptBundle, usize) {
    let mut prompts = PromptBundle::default();
    let mut section: Option<Section> = None;
    let mut i = start;

    while i < lines.len() {
        let line = lines[i].trim();
        if line.starts_with(FENCE) {
            return (prompts, i + 1);
        }
        i += 1;

        if let Some(caps) = PROMPT_KEY.captures(line) {
            let rest = caps[2].trim();
            match &caps[1] {
                "task" => {
                    prompts.task = rest.to_string();
                    section = Some(Section::Task);
                }
                "watch" => {
                    if !rest.is_empty() {
                        prompts.watch.push(rest.to_string());
                    }
                    section = Some(Section::Watch);
                }
                _ => {
                    if !rest.is_empty() {
                        prompts.after.push(rest.to_string());
                    }
                    section = Some(Section::After);
                }
            }
            continue;
        }

        match section {
            Some(Section::Watch) | Some(Section::After) => {
                if let Some(caps) = LIST_ITEM.captures(line) {
                    let item = caps[1].trim().to_string();
                    if section == Some(Section::Watch) {
                        prompts.watch.push(item);
                    } else {
                        prompts.after.push(item);
                    }
                }
            }
            Some(Section::Task) if !line.is_empty() => prompts.append_task(line),
            _ => {}
        }
    }

    tracing::debug!(start, "fenced video block runs to end of input");
    (prompts, i)
}

/// The combined video and prompts fragment for a fenced block.
pub fn video_stack(id: &str, prompts: &PromptBundle, bookmarks: &Bookmarks) -> String {
    format!(
        "<div class='video-stack'>{}{}</div>",
        video_block(id, bookmarks),
        local_prompts(prompts, bookmarks)
    )
}

/// The "Local prompts" box; empty when there is nothing to show.
pub fn local_prompts(prompts: &PromptBundle, bookmarks: &Bookmarks) -> String {
    let mut sections = Vec::new();

    let task = prompts.task.trim();
    if !task.is_empty() {
        sections.push(prompt_section(
            "Task",
            &format!("<p>{}</p>", render_inline(task, bookmarks)),
        ));
    }
    if !prompts.watch.is_empty() {
        sections.push(prompt_section("Watch for", &item_list(&prompts.watch, bookmarks)));
    }
    if !prompts.after.is_empty() {
        sections.push(prompt_section(
            "After watching",
            &item_list(&prompts.after, bookmarks),
        ));
    }

    if sections.is_empty() {
        return String::new();
    }
    format!(
        "<div class='local-prompts'><div class='local-prompts-title'>Local prompts</div>{}</div>",
        sections.concat()
    )
}

fn prompt_section(title: &str, body: &str) -> String {
    format!("<div class='prompt-section'><div class='prompt-title'>{title}</div>{body}</div>")
}

fn item_list(items: &[String], bookmarks: &Bookmarks) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", render_inline(item, bookmarks)))
        .collect();
    format!("<ul>{items}</ul>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn collect(src: &str) -> (PromptBundle, usize) {
        let lines: Vec<&str> = src.lines().collect();
        collect_prompts(&lines, 0)
    }

    #[test]
    fn matches_opener() {
        assert_eq!(match_opener("```video v1"), Some("v1"));
        assert_eq!(match_opener("  ```video   intro-2  "), Some("intro-2"));
        assert_eq!(match_opener("```video"), None);
        assert_eq!(match_opener("```python"), None);
        assert_eq!(match_opener("```video a b"), None);
    }

    #[test]
    fn collects_all_sections() {
        let (prompts, next) = collect(
            "task: Read the poem\naloud, twice.\nwatch: pacing\n- tone\n-   pauses  \nafter:\n- Record yourself\n```\nafter the block",
        );
        assert_eq!(prompts.task, "Read the poem aloud, twice.");
        assert_eq!(prompts.watch, vec!["pacing", "tone", "pauses"]);
        assert_eq!(prompts.after, vec!["Record yourself"]);
        assert_eq!(next, 8);
    }

    #[test]
    fn task_continuation_without_initial_text() {
        let (prompts, _) = collect("task:\n  First line\n\n  second line\n```");
        assert_eq!(prompts.task, "First line second line");
    }

    #[test]
    fn list_items_outside_lists_join_task() {
        let (prompts, _) = collect("task: Warm up\n- breathe\n```");
        assert_eq!(prompts.task, "Warm up - breathe");
        assert!(prompts.watch.is_empty());
    }

    #[test]
    fn stray_lines_are_ignored() {
        let (prompts, _) = collect("- before any key\nwatch:\nnot an item\n- item\n```");
        assert!(prompts.task.is_empty());
        assert_eq!(prompts.watch, vec!["item"]);
    }

    #[test]
    fn repeated_task_key_resets_text() {
        let (prompts, _) = collect("task: one\nmore\ntask: two\n```");
        assert_eq!(prompts.task, "two");
    }

    #[test]
    fn unclosed_block_consumes_remaining_lines() {
        let (prompts, next) = collect("task: Read\n# Not a heading here\n");
        assert_eq!(prompts.task, "Read # Not a heading here");
        assert_eq!(next, 2);
    }

    #[test]
    fn closer_may_carry_trailing_text() {
        let (_, next) = collect("watch: x\n```   end\nrest");
        assert_eq!(next, 2);
    }

    #[test]
    fn local_prompts_omitted_when_empty() {
        assert_eq!(local_prompts(&PromptBundle::default(), &Bookmarks::default()), "");
    }

    #[test]
    fn renders_prompt_sections() {
        let prompts = PromptBundle {
            task: "Read the poem".to_string(),
            watch: vec!["tone".to_string()],
            after: vec![],
        };
        assert_snapshot!(local_prompts(&prompts, &Bookmarks::default()), @"<div class='local-prompts'><div class='local-prompts-title'>Local prompts</div><div class='prompt-section'><div class='prompt-title'>Task</div><p>Read the poem</p></div><div class='prompt-section'><div class='prompt-title'>Watch for</div><ul><li>tone</li></ul></div></div>");
    }

    #[test]
    fn prompt_text_is_formatted() {
        let bookmarks = Bookmarks::parse("@link poem\nlabel: Poem\nurl: /poem\n");
        let prompts = PromptBundle {
            task: "Open {{link:poem}} & read *slowly*".to_string(),
            watch: vec![],
            after: vec!["**Discuss**".to_string()],
        };
        let html = local_prompts(&prompts, &bookmarks);
        assert!(html.contains("<p>Open <a href=\"/poem\" target=\"_blank\" rel=\"noreferrer\">Poem</a> &amp; read <em>slowly</em></p>"));
        assert!(html.contains("<div class='prompt-title'>After watching</div><ul><li><strong>Discuss</strong></li></ul>"));
        assert!(!html.contains("Watch for"));
    }

    #[test]
    fn stack_wraps_video_and_prompts() {
        let html = video_stack("ghost", &PromptBundle::default(), &Bookmarks::default());
        assert!(html.starts_with("<div class='video-stack'><div class='video'>"));
        assert!(html.contains("Missing bookmark: <code>ghost</code>"));
        assert!(html.ends_with("</div></div></div></div>"));
    }
}
