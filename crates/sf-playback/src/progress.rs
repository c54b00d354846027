use crate::position::PlaybackState;

/// How full one story's progress bar is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// Not started.
    Empty,
    /// Partly elapsed, as a percentage strictly between 0 and 100.
    Partial(f32),
    /// Finished.
    Full,
}

impl Fill {
    /// Classify a percentage, clamping it into `0.0..=100.0`.
    pub fn from_percent(percent: f32) -> Self {
        if percent.is_nan() || percent <= 0.0 {
            Self::Empty
        } else if percent >= 100.0 {
            Self::Full
        } else {
            Self::Partial(percent)
        }
    }

    /// The fill as a percentage.
    pub fn percent(self) -> f32 {
        match self {
            Self::Empty => 0.0,
            Self::Partial(p) => p,
            Self::Full => 100.0,
        }
    }
}

/// Progress bars for the current group, derived from playback state on demand.
///
/// Nothing is remembered per story: a story is full if it comes before the
/// current one, empty if after, and the current story shows live progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressProjection {
    current: usize,
    progress: f32,
    len: usize,
}

impl ProgressProjection {
    /// Project `state` onto a group holding `stories_in_group` stories.
    pub fn new(state: &PlaybackState, stories_in_group: usize) -> Self {
        Self {
            current: state.position.story,
            progress: state.progress,
            len: stories_in_group,
        }
    }

    /// Fill of the story at `index` in the current group.
    pub fn fill(&self, index: usize) -> Option<Fill> {
        if index >= self.len {
            return None;
        }
        Some(match index.cmp(&self.current) {
            std::cmp::Ordering::Less => Fill::Full,
            std::cmp::Ordering::Greater => Fill::Empty,
            std::cmp::Ordering::Equal => Fill::from_percent(self.progress),
        })
    }

    /// One fill per story in the current group, in order.
    pub fn bars(&self) -> Vec<Fill> {
        (0..self.len).filter_map(|i| self.fill(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn state(story: usize, progress: f32) -> PlaybackState {
        PlaybackState {
            position: Position::new(0, story),
            ticks: 0,
            progress,
            paused: false,
        }
    }

    #[test]
    fn bars_before_current_are_full_after_are_empty() {
        let bars = ProgressProjection::new(&state(1, 40.0), 3).bars();
        assert_eq!(bars, vec![Fill::Full, Fill::Partial(40.0), Fill::Empty]);
    }

    #[test]
    fn current_bar_at_bounds() {
        assert_eq!(
            ProgressProjection::new(&state(0, 0.0), 1).fill(0),
            Some(Fill::Empty)
        );
        assert_eq!(
            ProgressProjection::new(&state(0, 100.0), 1).fill(0),
            Some(Fill::Full)
        );
    }

    #[test]
    fn out_of_range_index_has_no_bar() {
        assert_eq!(ProgressProjection::new(&state(0, 10.0), 2).fill(2), None);
    }

    #[test]
    fn fill_percent_clamps() {
        assert!((Fill::from_percent(-3.0).percent() - 0.0).abs() < f32::EPSILON);
        assert!((Fill::from_percent(140.0).percent() - 100.0).abs() < f32::EPSILON);
        assert!((Fill::from_percent(47.0).percent() - 47.0).abs() < f32::EPSILON);
    }
}
