use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::author::AuthorId;
use crate::error::{CoreError, CoreResult};
use crate::group::StoryCollection;
use crate::post::Post;
use crate::story::StoryId;

/// Everything the feed screen shows: the stories strip and the post list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Story groups in strip order.
    #[serde(default)]
    pub stories: StoryCollection,
    /// Posts in list order.
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// A structural problem found by [`Feed::validate`]. None of these stop playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedIssue {
    /// A story group contains no stories.
    EmptyGroup {
        /// Position of the group in the strip.
        group: usize,
        /// The group's author.
        author: AuthorId,
    },
    /// The same story ID appears more than once.
    DuplicateStory(StoryId),
    /// A story expires at or before the moment it was created.
    ExpiresBeforeCreated(StoryId),
    /// A story's author differs from the author of its group.
    ForeignAuthor {
        /// The misplaced story.
        story: StoryId,
        /// The group's author.
        group_author: AuthorId,
    },
}

impl fmt::Display for FeedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGroup { group, author } => {
                write!(f, "story group {group} ({author}) has no stories")
            }
            Self::DuplicateStory(id) => write!(f, "story {id} appears more than once"),
            Self::ExpiresBeforeCreated(id) => write!(f, "story {id} expires before it was created"),
            Self::ForeignAuthor {
                story,
                group_author,
            } => write!(f, "story {story} is not by group author {group_author}"),
        }
    }
}

impl Feed {
    /// Create a feed from its parts.
    pub fn new(stories: StoryCollection, posts: Vec<Post>) -> Self {
        Self { stories, posts }
    }

    /// Parse a feed from a JSON document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a feed file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize the feed as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the feed to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Report structural issues in the story data.
    pub fn validate(&self) -> Vec<FeedIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (index, group) in self.stories.groups().iter().enumerate() {
            if group.is_empty() {
                issues.push(FeedIssue::EmptyGroup {
                    group: index,
                    author: group.author.id.clone(),
                });
            }
            for story in &group.stories {
                if !seen.insert(&story.id) {
                    issues.push(FeedIssue::DuplicateStory(story.id.clone()));
                }
                if story.expires_at <= story.created_at {
                    issues.push(FeedIssue::ExpiresBeforeCreated(story.id.clone()));
                }
                if story.author.id != group.author.id {
                    issues.push(FeedIssue::ForeignAuthor {
                        story: story.id.clone(),
                        group_author: group.author.id.clone(),
                    });
                }
            }
        }

        issues
    }
}
