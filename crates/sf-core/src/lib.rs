//! Core feed types for Storyfeed: stories, story groups, posts, and the feed model.
//!
//! This crate defines the read-only data that the story viewer plays back. It
//! has no knowledge of playback; you can construct a [`Feed`] programmatically,
//! load one from JSON, or start from the bundled [`sample`] feed.

/// Author identities shared by stories and posts.
pub mod author;
/// Error types used throughout the crate.
pub mod error;
/// The feed: story collection plus post list, with JSON loading and validation.
pub mod feed;
/// Story groups and the ordered story collection handed to the viewer.
pub mod group;
/// Posts shown in the main feed list.
pub mod post;
/// Built-in sample feed for demos and tests.
pub mod sample;
/// Stories and their tagged media content.
pub mod story;

/// Re-export author types.
pub use author::{Author, AuthorId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export feed types.
pub use feed::{Feed, FeedIssue};
/// Re-export group types.
pub use group::{StoryCollection, StoryGroup};
/// Re-export post types.
pub use post::{Post, PostId};
/// Re-export story types.
pub use story::{Interactions, Location, MediaKind, Story, StoryContent, StoryId};
