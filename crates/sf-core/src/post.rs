use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::author::Author;

/// Unique identifier for a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A permanent post in the main feed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier.
    pub id: PostId,
    /// Multi-line post body.
    pub content: String,
    /// Who wrote it.
    pub author: Author,
    /// When it was published.
    pub created_at: DateTime<Utc>,
    /// Like count.
    #[serde(default)]
    pub likes: u32,
    /// Comment count.
    #[serde(default)]
    pub comments: u32,
    /// Share count.
    #[serde(default)]
    pub shares: u32,
}

impl Post {
    /// Hashtags mentioned in the body, without the leading `#`.
    pub fn hashtags(&self) -> Vec<&str> {
        self.content
            .split_whitespace()
            .filter_map(|word| word.strip_prefix('#'))
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// First line of the body, used as a one-line summary.
    pub fn headline(&self) -> &str {
        self.content.lines().next().unwrap_or_default()
    }
}
