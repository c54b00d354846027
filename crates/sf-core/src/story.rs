use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::author::{Author, AuthorId};

/// How long a story stays visible after it is posted.
pub const STORY_LIFETIME_HOURS: i64 = 24;

/// Unique identifier for a story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub String);

impl StoryId {
    /// Generate a new random story ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The kind of media a story displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Plain text on a background.
    Text,
    /// A still image.
    Image,
    /// A looping, muted video.
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// What a story shows. Media variants always carry their URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoryContent {
    /// A text-only story.
    Text {
        /// The story text.
        text: String,
    },
    /// An image story.
    Image {
        /// Image URL.
        url: String,
        /// Optional caption shown with the image.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// A video story.
    Video {
        /// Video URL.
        url: String,
        /// Optional caption shown with the video.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl StoryContent {
    /// The media kind of this content.
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Text { .. } => MediaKind::Text,
            Self::Image { .. } => MediaKind::Image,
            Self::Video { .. } => MediaKind::Video,
        }
    }

    /// The media URL, if this is an image or video.
    pub fn media_url(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::Image { url, .. } | Self::Video { url, .. } => Some(url),
        }
    }

    /// The text to show: the story text, or the media caption if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Image { caption, .. } | Self::Video { caption, .. } => caption.as_deref(),
        }
    }
}

/// Snapshot of interaction counters at the time the story was loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactions {
    /// Number of likes.
    pub likes: u32,
    /// Number of comments.
    pub comments: u32,
    /// Number of shares.
    pub shares: u32,
}

/// A named place a story was posted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Human-readable place name.
    pub name: String,
    /// Latitude and longitude, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
}

/// A single time-limited story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier.
    pub id: StoryId,
    /// What the story shows.
    pub content: StoryContent,
    /// Who posted it.
    pub author: Author,
    /// When it was posted.
    pub created_at: DateTime<Utc>,
    /// When it stops being shown.
    pub expires_at: DateTime<Utc>,
    /// Viewers who have already seen it.
    #[serde(default)]
    pub viewed_by: Vec<AuthorId>,
    /// Interaction counters snapshot.
    #[serde(default)]
    pub interactions: Interactions,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Optional mood label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Optional place the story was posted from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Story {
    /// Create a story posted at `created_at` that expires after the standard lifetime.
    pub fn new(author: Author, content: StoryContent, created_at: DateTime<Utc>) -> Self {
        Self {
            id: StoryId::generate(),
            content,
            author,
            created_at,
            expires_at: created_at + Duration::hours(STORY_LIFETIME_HOURS),
            viewed_by: Vec::new(),
            interactions: Interactions::default(),
            tags: Vec::new(),
            mood: None,
            location: None,
        }
    }

    /// Create a text story posted now.
    pub fn text(author: Author, text: impl Into<String>) -> Self {
        Self::new(author, StoryContent::Text { text: text.into() }, Utc::now())
    }

    /// The media kind of this story's content.
    pub fn kind(&self) -> MediaKind {
        self.content.kind()
    }

    /// Whether the story is no longer shown at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether `viewer` has already seen this story.
    pub fn is_viewed_by(&self, viewer: &AuthorId) -> bool {
        self.viewed_by.contains(viewer)
    }
}
