//! Video bookmark fragments.

use crate::bookmarks::{Bookmarks, ResourceKind};
use crate::escape::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;

static SHORT_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"youtu\.be/([^?&/]+)").unwrap());
static WATCH_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com/watch\?v=([^?&/]+)").unwrap());

/// Thumbnail image for a platform video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg")
}

/// Pull the platform video id out of a short or canonical watch url.
///
/// When both shapes appear, the canonical one wins.
pub fn video_id(url: &str) -> Option<&str> {
    let short = SHORT_LINK.captures(url).and_then(|caps| caps.get(1));
    let watch = WATCH_LINK.captures(url).and_then(|caps| caps.get(1));
    watch.or(short).map(|m| m.as_str())
}

/// Render the fragment for a video bookmark, or a missing-bookmark box.
pub fn video_block(id: &str, bookmarks: &Bookmarks) -> String {
    let Some(resource) = bookmarks.resolve(id) else {
        tracing::warn!(%id, "missing video bookmark");
        return missing_video(id);
    };

    let url = escape_html(&resource.url);
    let label = escape_html(resource.label_or(ResourceKind::Video.default_label()));
    let description = resource.description.trim();

    let mut html = String::from("<div class='video'><div class='video-top'>");
    if let Some(vid) = video_id(&resource.url) {
        html.push_str(&format!(
            "<a class='video-thumb' href=\"{url}\" target=\"_blank\" rel=\"noreferrer\">\
             <img alt='Video thumbnail' src=\"{}\"></a>",
            escape_html(&thumbnail_url(vid))
        ));
    }
    html.push_str(&format!(
        "<div class='video-title'><span class='tag'>Video</span> \
         <a href=\"{url}\" target=\"_blank\" rel=\"noreferrer\"><strong>{label}</strong></a></div>"
    ));
    if !description.is_empty() {
        html.push_str(&format!(
            "<p class='video-desc'>{}</p>",
            escape_html(description)
        ));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        "<div class='video-bottom'><p class='video-open'>\
         <a href=\"{url}\" target=\"_blank\" rel=\"noreferrer\">Open on YouTube</a></p></div>"
    ));
    html.push_str("</div>");
    html
}

fn missing_video(id: &str) -> String {
    format!(
        "<div class='video'><div class='video-top'><div class='video-title'>\
         <span class='tag'>Video</span> Missing bookmark: <code>{}</code></div></div></div>",
        escape_html(id)
    )
}
