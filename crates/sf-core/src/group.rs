use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::author::Author;
use crate::error::{CoreError, CoreResult};
use crate::story::Story;

/// One author's ordered set of currently active stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryGroup {
    /// The author all stories in this group belong to.
    pub author: Author,
    /// Stories in display order.
    pub stories: Vec<Story>,
    /// Whether the group contains stories the viewer has not seen.
    /// Informational only; playback never changes it.
    #[serde(default)]
    pub has_unviewed: bool,
}

impl StoryGroup {
    /// Create a group. A group must start with at least one story.
    pub fn new(author: Author, stories: Vec<Story>, has_unviewed: bool) -> CoreResult<Self> {
        if stories.is_empty() {
            return Err(CoreError::EmptyGroup { author: author.id });
        }
        Ok(Self {
            author,
            stories,
            has_unviewed,
        })
    }

    /// Number of stories in the group.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the group has no stories. Only possible for deserialized data.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Story at `index`, if any.
    pub fn story(&self, index: usize) -> Option<&Story> {
        self.stories.get(index)
    }

    /// Index of the last story, or `None` for an empty group.
    pub fn last_index(&self) -> Option<usize> {
        self.stories.len().checked_sub(1)
    }

    /// A copy of this group holding only stories still active at `now`.
    ///
    /// Returns `None` if every story has expired.
    pub fn active_at(&self, now: DateTime<Utc>) -> Option<Self> {
        let stories: Vec<Story> = self
            .stories
            .iter()
            .filter(|s| !s.is_expired(now))
            .cloned()
            .collect();
        if stories.is_empty() {
            return None;
        }
        Some(Self {
            author: self.author.clone(),
            stories,
            has_unviewed: self.has_unviewed,
        })
    }
}

/// The ordered list of story groups handed to the viewer. Read-only input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryCollection {
    groups: Vec<StoryGroup>,
}

impl StoryCollection {
    /// Create a collection from groups in display order.
    pub fn new(groups: Vec<StoryGroup>) -> Self {
        Self { groups }
    }

    /// A collection holding one author's stories, as opened from a preview bubble.
    pub fn single(group: StoryGroup) -> Self {
        Self {
            groups: vec![group],
        }
    }

    /// All groups in order.
    pub fn groups(&self) -> &[StoryGroup] {
        &self.groups
    }

    /// Group at `index`, if any.
    pub fn group(&self, index: usize) -> Option<&StoryGroup> {
        self.groups.get(index)
    }

    /// Story at `(group, story)`, if both indices are in range.
    pub fn story_at(&self, group: usize, story: usize) -> Option<&Story> {
        self.group(group).and_then(|g| g.story(story))
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of stories in group `index`; zero for an out-of-range index.
    pub fn stories_in_group(&self, index: usize) -> usize {
        self.group(index).map_or(0, StoryGroup::len)
    }

    /// Total number of stories across all groups.
    pub fn story_count(&self) -> usize {
        self.groups.iter().map(StoryGroup::len).sum()
    }

    /// Whether there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// A copy without expired stories and without groups left empty by that.
    pub fn active_at(&self, now: DateTime<Utc>) -> Self {
        Self {
            groups: self
                .groups
                .iter()
                .filter_map(|g| g.active_at(now))
                .collect(),
        }
    }
}

impl From<Vec<StoryGroup>> for StoryCollection {
    fn from(groups: Vec<StoryGroup>) -> Self {
        Self::new(groups)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::story::StoryContent;

    fn author(id: &str) -> Author {
        Author::new(id, format!("user-{id}"), format!("https://example.test/{id}.svg"))
    }

    fn story_at(author: &Author, created_at: DateTime<Utc>) -> Story {
        Story::new(
            author.clone(),
            StoryContent::Text {
                text: "story".into(),
            },
            created_at,
        )
    }

    fn group(id: &str, n: usize) -> StoryGroup {
        let a = author(id);
        let now = Utc::now();
        let stories = (0..n).map(|_| story_at(&a, now)).collect();
        StoryGroup::new(a, stories, true).unwrap()
    }

    #[test]
    fn empty_group_rejected() {
        let result = StoryGroup::new(author("1"), Vec::new(), false);
        assert!(matches!(result, Err(CoreError::EmptyGroup { .. })));
    }

    #[test]
    fn collection_shape_queries() {
        let collection = StoryCollection::new(vec![group("a", 1), group("b", 2)]);
        assert_eq!(collection.group_count(), 2);
        assert_eq!(collection.stories_in_group(0), 1);
        assert_eq!(collection.stories_in_group(1), 2);
        assert_eq!(collection.stories_in_group(7), 0);
        assert_eq!(collection.story_count(), 3);
        assert!(collection.story_at(1, 1).is_some());
        assert!(collection.story_at(0, 1).is_none());
        assert!(!collection.is_empty());
    }

    #[test]
    fn last_index_of_group() {
        assert_eq!(group("a", 3).last_index(), Some(2));
    }

    #[test]
    fn active_at_drops_expired_stories_and_empty_groups() {
        let now = Utc::now();
        let a = author("a");
        let b = author("b");
        let old = now - Duration::hours(30);
        let groups = vec![
            StoryGroup::new(a.clone(), vec![story_at(&a, old), story_at(&a, now)], true).unwrap(),
            StoryGroup::new(b.clone(), vec![story_at(&b, old)], false).unwrap(),
        ];
        let active = StoryCollection::new(groups).active_at(now);
        assert_eq!(active.group_count(), 1);
        assert_eq!(active.stories_in_group(0), 1);
        assert_eq!(active.groups()[0].author.id, a.id);
    }

    #[test]
    fn single_wraps_one_group() {
        let collection = StoryCollection::single(group("solo", 2));
        assert_eq!(collection.group_count(), 1);
        assert_eq!(collection.stories_in_group(0), 2);
    }

    #[test]
    fn deserialized_group_may_be_empty() {
        let json = r#"[{"author":{"id":"x","name":"X","avatar":""},"stories":[]}]"#;
        let collection: StoryCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.group_count(), 1);
        assert!(collection.groups()[0].is_empty());
        assert!(!collection.groups()[0].has_unviewed);
    }
}
