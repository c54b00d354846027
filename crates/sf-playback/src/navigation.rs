use sf_core::StoryCollection;

use crate::position::Position;

/// The shape of a story collection: how many groups, and how many stories each holds.
pub trait CollectionShape {
    /// Number of author groups.
    fn group_count(&self) -> usize;
    /// Number of stories in `group`; zero for an out-of-range group.
    fn stories_in_group(&self, group: usize) -> usize;
}

impl CollectionShape for StoryCollection {
    fn group_count(&self) -> usize {
        StoryCollection::group_count(self)
    }

    fn stories_in_group(&self, group: usize) -> usize {
        StoryCollection::stories_in_group(self, group)
    }
}

/// A bare list of group sizes.
impl CollectionShape for [usize] {
    fn group_count(&self) -> usize {
        self.len()
    }

    fn stories_in_group(&self, group: usize) -> usize {
        self.get(group).copied().unwrap_or(0)
    }
}

/// Direction of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the next story.
    Forward,
    /// Toward the previous story.
    Backward,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move to a new story.
    Moved(Position),
    /// Nothing earlier to go to; stay put.
    Stay,
    /// Nothing later to go to; the viewer should close.
    Close,
}

/// Compute where `direction` leads from `from`.
///
/// Forward walks to the next story, then to the first story of the next
/// group, then closes. Backward walks to the previous story, then to the last
/// story of the previous group, and stays put at the very first story.
/// Groups without stories are skipped in both directions.
pub fn advance<S: CollectionShape + ?Sized>(from: Position, shape: &S, direction: Direction) -> Step {
    match direction {
        Direction::Forward => forward(from, shape),
        Direction::Backward => backward(from, shape),
    }
}

fn forward<S: CollectionShape + ?Sized>(from: Position, shape: &S) -> Step {
    if from.story + 1 < shape.stories_in_group(from.group) {
        return Step::Moved(Position::new(from.group, from.story + 1));
    }
    (from.group + 1..shape.group_count())
        .find(|&g| shape.stories_in_group(g) > 0)
        .map_or(Step::Close, |g| Step::Moved(Position::new(g, 0)))
}

fn backward<S: CollectionShape + ?Sized>(from: Position, shape: &S) -> Step {
    if from.story > 0 {
        return Step::Moved(Position::new(from.group, from.story - 1));
    }
    (0..from.group)
        .rev()
        .find_map(|g| {
            shape
                .stories_in_group(g)
                .checked_sub(1)
                .map(|last| Position::new(g, last))
        })
        .map_or(Step::Stay, Step::Moved)
}
