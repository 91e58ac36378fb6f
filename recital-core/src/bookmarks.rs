//! Bookmark table: named video and link resources.
//!
//! A lesson declares each external resource once and refers to it by id
//! everywhere else:
//!
//!     @video intro
//!     label: Reading aloud, part 1
//!     url: https://youtu.be/abc123
//!     desc: Watch the first two minutes.
//!
//!     @link poem
//!     url: https://example.com/the-raven
//!
//! The table is built in a single pass before rendering starts and is never
//! mutated afterwards. A declaration collects every `label:`/`url:`/`desc:`
//! line that follows it, up to the next declaration or the end of the
//! document. Anything else inside that span is ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(video|link)\s+([A-Za-z0-9_-]+)$").unwrap());
static DECLARATION_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@(?:video|link)\s").unwrap());
static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(label|url|desc)\s*:\s*(.+)$").unwrap());

/// What a bookmark points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Link,
}

impl ResourceKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "video" => Some(ResourceKind::Video),
            "link" => Some(ResourceKind::Link),
            _ => None,
        }
    }

    /// Label used when the declaration has none.
    pub fn default_label(self) -> &'static str {
        match self {
            ResourceKind::Video => "Video",
            ResourceKind::Link => "Link",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Video => write!(f, "video"),
            ResourceKind::Link => write!(f, "link"),
        }
    }
}

/// A single declared bookmark. Empty strings mean "not given".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub label: String,
    pub url: String,
    pub description: String,
}

impl Resource {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            label: String::new(),
            url: String::new(),
            description: String::new(),
        }
    }

    /// A resource without a url renders as a missing bookmark.
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    /// The label, or `fallback` when none was declared.
    pub fn label_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let label = self.label.trim();
        if label.is_empty() {
            fallback
        } else {
            label
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "label" => &mut self.label,
            "url" => &mut self.url,
            _ => &mut self.description,
        };
        *slot = value.to_string();
    }
}

/// Read-only mapping from bookmark id to [`Resource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bookmarks {
    entries: BTreeMap<String, Resource>,
}

impl Bookmarks {
    /// Scan a whole document for bookmark declarations.
    ///
    /// Redeclaring an id replaces the earlier entry, kind included.
    pub fn parse(source: &str) -> Self {
        let lines: Vec<&str> = source.lines().collect();
        let mut entries = BTreeMap::new();
        let mut i = 0;

        while i < lines.len() {
            let Some((kind, id)) = match_declaration(lines[i]) else {
                i += 1;
                continue;
            };

            let mut resource = Resource::new(kind);
            i += 1;
            while i < lines.len() && !DECLARATION_START.is_match(lines[i].trim()) {
                if let Some(caps) = ATTRIBUTE.captures(lines[i].trim()) {
                    let value = caps[2].trim();
                    if !value.is_empty() {
                        resource.set(&caps[1], value);
                    }
                }
                i += 1;
            }

            if let Some(previous) = entries.insert(id.clone(), resource) {
                if previous.kind != kind {
                    tracing::warn!(%id, from = %previous.kind, to = %kind, "bookmark redeclared with a different kind");
                } else {
                    tracing::debug!(%id, "bookmark redeclared");
                }
            }
        }

        tracing::debug!(count = entries.len(), "built bookmark table");
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.entries.get(id)
    }

    /// Look up a bookmark that can actually be linked to.
    pub fn resolve(&self, id: &str) -> Option<&Resource> {
        self.get(id).filter(|resource| resource.has_url())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.entries.iter().map(|(id, resource)| (id.as_str(), resource))
    }
}

fn match_declaration(line: &str) -> Option<(ResourceKind, String)> {
    let caps = DECLARATION.captures(line.trim())?;
    let kind = ResourceKind::from_keyword(&caps[1])?;
    Some((kind, caps[2].to_string()))
}
