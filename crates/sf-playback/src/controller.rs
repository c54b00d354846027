use std::time::Duration;

use sf_core::{Story, StoryCollection, StoryGroup};
use tracing::{debug, info, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::PlaybackConfig;
use crate::error::PlaybackResult;
use crate::event::{EventLog, PlaybackEventKind};
use crate::input::{Command, InputEvent, InputMediator};
use crate::navigation::{self, Direction, Step};
use crate::position::{CloseReason, Phase, PlaybackState, Position};
use crate::progress::{Fill, ProgressProjection};
use crate::timer::{TimerId, TimerSlot};

type CloseListener<'a> = Box<dyn FnMut(CloseReason) + 'a>;

/// Plays a story collection as a timed, pausable carousel.
///
/// The controller is the only writer of playback state. Every change of
/// position or of the paused flag cancels the current timer epoch and, if
/// still playing, arms a new one, so an expiry scheduled for a previous
/// story can never tick the current one. Once closed, the controller is
/// inert.
pub struct PlaybackController<'a, C: Clock = SystemClock> {
    collection: &'a StoryCollection,
    config: PlaybackConfig,
    input: InputMediator,
    clock: C,
    phase: Phase,
    timer: TimerSlot,
    events: EventLog,
    on_close: Option<CloseListener<'a>>,
    close_notified: bool,
}

impl<C: Clock> std::fmt::Debug for PlaybackController<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("phase", &self.phase)
            .field("timer", &self.timer.live())
            .field("events", &self.events.len())
            .finish()
    }
}

impl<'a, C: Clock> PlaybackController<'a, C> {
    /// Open a viewer on `collection`.
    ///
    /// An absent or out-of-range `initial` position starts at the first story.
    /// If there is no story there (no groups, or an empty first group) the
    /// viewer is closed immediately with [`CloseReason::EmptyCollection`].
    pub fn start(
        collection: &'a StoryCollection,
        initial: Option<Position>,
        config: PlaybackConfig,
        clock: C,
    ) -> PlaybackResult<Self> {
        config.validate()?;
        let position = Position::clamp(initial, collection);
        let mut controller = Self {
            collection,
            input: InputMediator::new(config.tap_zone),
            events: EventLog::new(config.max_events),
            config,
            clock,
            phase: Phase::Closed(CloseReason::EmptyCollection),
            timer: TimerSlot::new(),
            on_close: None,
            close_notified: false,
        };
        let now = controller.clock.now();

        if !position.is_valid_in(collection) {
            info!("no story at the start position");
            controller.finish(CloseReason::EmptyCollection, now);
            return Ok(controller);
        }

        controller.phase = Phase::Playing(PlaybackState::at(position));
        controller.rearm(now);
        controller
            .events
            .record(now, PlaybackEventKind::Opened { at: position });
        info!(
            %position,
            groups = collection.group_count(),
            "story viewer opened"
        );
        Ok(controller)
    }

    /// Register the terminal-close listener.
    ///
    /// The listener runs at most once per viewer. If the viewer has already
    /// closed and nobody was notified yet, it runs immediately.
    pub fn on_close<F>(&mut self, listener: F)
    where
        F: FnMut(CloseReason) + 'a,
    {
        self.on_close = Some(Box::new(listener));
        if let Phase::Closed(reason) = self.phase {
            self.notify(reason);
        }
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Apply one progress step. Ignored while paused or closed.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.tick_at(now);
    }

    /// Deliver an expiry of timer `id`. Expiries of cancelled epochs are ignored.
    ///
    /// Returns whether the tick was applied.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        let now = self.clock.now();
        if !self.timer.acknowledge(id, now) {
            debug!(timer = %id, "ignoring stale tick");
            return false;
        }
        self.tick_at(now);
        true
    }

    /// Apply every tick that has fallen due on the clock since the last call.
    ///
    /// Returns the number of ticks applied.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now();
        let mut applied = 0;
        while let Some(firing) = self.timer.poll(now) {
            self.tick_at(firing.at);
            applied += 1;
        }
        applied
    }

    /// Hold playback. Progress is kept.
    pub fn pause(&mut self) {
        let Phase::Playing(mut state) = self.phase else {
            return;
        };
        if state.paused {
            return;
        }
        state.paused = true;
        self.phase = Phase::Playing(state);
        let now = self.clock.now();
        self.rearm(now);
        self.events.record(
            now,
            PlaybackEventKind::Paused {
                at: state.position,
                progress: state.progress,
            },
        );
        debug!(position = %state.position, progress = state.progress, "paused");
    }

    /// Release playback. Progress continues from where it was held.
    pub fn resume(&mut self) {
        let Phase::Playing(mut state) = self.phase else {
            return;
        };
        if !state.paused {
            return;
        }
        state.paused = false;
        self.phase = Phase::Playing(state);
        let now = self.clock.now();
        self.rearm(now);
        self.events.record(
            now,
            PlaybackEventKind::Resumed {
                at: state.position,
                progress: state.progress,
            },
        );
        debug!(position = %state.position, progress = state.progress, "resumed");
    }

    /// Skip to the adjacent story in `direction`, starting it from zero.
    ///
    /// Works while paused. Going back from the very first story changes
    /// nothing; going forward from the very last story closes the viewer.
    /// Returns `None` if the viewer is already closed.
    pub fn navigate(&mut self, direction: Direction) -> Option<Step> {
        let Phase::Playing(state) = self.phase else {
            return None;
        };
        let now = self.clock.now();
        let from = state.position;
        let step = navigation::advance(from, self.collection, direction);
        match step {
            Step::Moved(to) => {
                self.enter(to, state.paused, now);
                self.events.record(
                    now,
                    PlaybackEventKind::Navigated {
                        from,
                        to,
                        direction,
                    },
                );
                debug!(%from, %to, ?direction, "navigated");
            }
            Step::Stay => {
                self.events
                    .record(now, PlaybackEventKind::Stayed { at: from });
                debug!(%from, "already at the first story");
            }
            Step::Close => self.finish(CloseReason::Exhausted, now),
        }
        Some(step)
    }

    /// Close the viewer. The timer is cancelled before this returns.
    pub fn close(&mut self) {
        if self.is_closed() {
            return;
        }
        let now = self.clock.now();
        self.finish(CloseReason::Explicit, now);
    }

    /// Run a command produced by the input mediator.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Navigate(direction) => {
                self.navigate(direction);
            }
            Command::Close => self.close(),
        }
    }

    /// Translate a raw input event and run the resulting command, if any.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<Command> {
        let command = self.input.map(event)?;
        self.apply(command);
        Some(command)
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Live playback state, or `None` once closed.
    pub fn state(&self) -> Option<PlaybackState> {
        match self.phase {
            Phase::Playing(state) => Some(state),
            Phase::Closed(_) => None,
        }
    }

    /// The story position on screen.
    pub fn position(&self) -> Option<Position> {
        self.state().map(|s| s.position)
    }

    /// Progress through the current story, in percent.
    pub fn progress(&self) -> Option<f32> {
        self.state().map(|s| s.progress)
    }

    /// Whether playback is held.
    pub fn is_paused(&self) -> bool {
        self.state().is_some_and(|s| s.paused)
    }

    /// Whether the viewer has closed.
    pub fn is_closed(&self) -> bool {
        matches!(self.phase, Phase::Closed(_))
    }

    /// Why the viewer closed, if it has.
    pub fn close_reason(&self) -> Option<CloseReason> {
        match self.phase {
            Phase::Closed(reason) => Some(reason),
            Phase::Playing(_) => None,
        }
    }

    /// The author group on screen.
    pub fn current_group(&self) -> Option<&'a StoryGroup> {
        let collection = self.collection;
        self.position().and_then(|p| collection.group(p.group))
    }

    /// The story on screen.
    pub fn current_story(&self) -> Option<&'a Story> {
        let collection = self.collection;
        self.position()
            .and_then(|p| collection.story_at(p.group, p.story))
    }

    /// Progress bars for the current group.
    pub fn projection(&self) -> Option<ProgressProjection> {
        let state = self.state()?;
        let len = self.collection.stories_in_group(state.position.group);
        Some(ProgressProjection::new(&state, len))
    }

    /// One fill per story of the current group; empty once closed.
    pub fn progress_bars(&self) -> Vec<Fill> {
        self.projection().map(|p| p.bars()).unwrap_or_default()
    }

    /// Fill of story `index` in the current group.
    pub fn fill(&self, index: usize) -> Option<Fill> {
        self.projection().and_then(|p| p.fill(index))
    }

    /// The collection being played.
    pub fn collection(&self) -> &'a StoryCollection {
        self.collection
    }

    /// The active configuration.
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Everything that has happened so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The live timer epoch, if playing and not paused.
    pub fn live_timer(&self) -> Option<TimerId> {
        self.timer.live()
    }

    /// When the next tick is due on the clock.
    pub fn next_tick_due(&self) -> Option<Duration> {
        self.timer.next_due()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn tick_at(&mut self, at: Duration) {
        let Phase::Playing(mut state) = self.phase else {
            return;
        };
        if state.paused {
            return;
        }

        state.ticks = state.ticks.saturating_add(1);
        state.progress = self.config.progress_after(state.ticks);
        if state.ticks < self.config.ticks_per_story() {
            self.phase = Phase::Playing(state);
            trace!(position = %state.position, progress = state.progress, "tick");
            return;
        }

        let from = state.position;
        match navigation::advance(from, self.collection, Direction::Forward) {
            Step::Moved(to) => {
                self.enter(to, false, at);
                self.events
                    .record(at, PlaybackEventKind::Advanced { from, to });
                debug!(%from, %to, "story finished");
            }
            Step::Stay | Step::Close => self.finish(CloseReason::Exhausted, at),
        }
    }

    /// Show `position` from zero and start a new timer epoch for it.
    fn enter(&mut self, position: Position, paused: bool, at: Duration) {
        self.phase = Phase::Playing(PlaybackState {
            paused,
            ..PlaybackState::at(position)
        });
        self.rearm(at);
    }

    /// Cancel the current epoch and arm a new one if playback is running.
    fn rearm(&mut self, at: Duration) {
        match self.phase {
            Phase::Playing(state) if !state.paused => {
                let id = self.timer.arm(at, self.config.tick_interval);
                trace!(timer = %id, "timer armed");
            }
            _ => {
                if let Some(id) = self.timer.disarm() {
                    trace!(timer = %id, "timer cancelled");
                }
            }
        }
    }

    fn finish(&mut self, reason: CloseReason, at: Duration) {
        self.timer.disarm();
        self.phase = Phase::Closed(reason);
        self.events
            .record(at, PlaybackEventKind::Closed { reason });
        info!(%reason, "story viewer closed");
        self.notify(reason);
    }

    fn notify(&mut self, reason: CloseReason) {
        if self.close_notified {
            return;
        }
        if let Some(listener) = self.on_close.as_mut() {
            self.close_notified = true;
            listener(reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::Utc;
    use sf_core::{Author, StoryContent};

    use super::*;
    use crate::clock::ManualClock;
    use crate::config::DEFAULT_MAX_EVENTS;

    const TICK: Duration = Duration::from_millis(50);

    fn collection(sizes: &[usize]) -> StoryCollection {
        let now = Utc::now();
        let groups = sizes
            .iter()
            .enumerate()
            .map(|(g, &n)| {
                let author = Author::new(format!("{g}").as_str(), format!("author-{g}"), "");
                let stories = (0..n)
                    .map(|s| {
                        Story::new(
                            author.clone(),
                            StoryContent::Text {
                                text: format!("story {g}.{s}"),
                            },
                            now,
                        )
                    })
                    .collect();
                StoryGroup {
                    author,
                    stories,
                    has_unviewed: true,
                }
            })
            .collect();
        StoryCollection::new(groups)
    }

    fn start<'a>(
        stories: &'a StoryCollection,
        initial: Option<Position>,
    ) -> (PlaybackController<'a, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let controller =
            PlaybackController::start(stories, initial, PlaybackConfig::default(), clock.clone())
                .unwrap();
        (controller, clock)
    }

    fn ticks(controller: &mut PlaybackController<'_, ManualClock>, n: usize) {
        for _ in 0..n {
            controller.tick();
        }
    }

    #[test]
    fn opens_at_origin_playing() {
        let stories = collection(&[1, 2]);
        let (viewer, _) = start(&stories, None);
        assert_eq!(viewer.position(), Some(Position::ORIGIN));
        assert_eq!(viewer.progress(), Some(0.0));
        assert!(!viewer.is_paused());
        assert!(viewer.live_timer().is_some());
        assert_eq!(
            viewer.events().events()[0].kind,
            PlaybackEventKind::Opened {
                at: Position::ORIGIN
            }
        );
    }

    #[test]
    fn out_of_range_start_is_clamped() {
        let stories = collection(&[1, 2]);
        let (viewer, _) = start(&stories, Some(Position::new(4, 9)));
        assert_eq!(viewer.position(), Some(Position::ORIGIN));
    }

    #[test]
    fn empty_collection_closes_immediately() {
        let stories = collection(&[]);
        let closes = RefCell::new(Vec::new());
        let (mut viewer, _) = start(&stories, None);
        assert_eq!(viewer.close_reason(), Some(CloseReason::EmptyCollection));
        assert!(viewer.live_timer().is_none());

        viewer.on_close(|reason| closes.borrow_mut().push(reason));
        viewer.close();
        viewer.tick();
        drop(viewer);
        assert_eq!(closes.into_inner(), vec![CloseReason::EmptyCollection]);
    }

    #[test]
    fn empty_first_group_closes_immediately() {
        let stories = collection(&[0, 3]);
        let (viewer, _) = start(&stories, None);
        assert!(viewer.is_closed());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let stories = collection(&[1]);
        let config = PlaybackConfig::default().with_tick_interval(Duration::ZERO);
        let result = PlaybackController::start(&stories, None, config, ManualClock::new());
        assert!(result.is_err());
    }

    #[test]
    fn auto_advance_then_manual_skip_then_close() {
        let stories = collection(&[1, 2]);
        let closes = RefCell::new(Vec::new());
        let (mut viewer, clock) = start(&stories, Some(Position::ORIGIN));
        viewer.on_close(|reason| closes.borrow_mut().push(reason));

        ticks(&mut viewer, 99);
        assert_eq!(viewer.position(), Some(Position::ORIGIN));
        assert_eq!(viewer.progress(), Some(99.0));

        viewer.tick();
        assert_eq!(viewer.position(), Some(Position::new(1, 0)));
        assert_eq!(viewer.progress(), Some(0.0));

        assert_eq!(
            viewer.navigate(Direction::Forward),
            Some(Step::Moved(Position::new(1, 1)))
        );
        assert_eq!(viewer.navigate(Direction::Forward), Some(Step::Close));
        assert_eq!(viewer.close_reason(), Some(CloseReason::Exhausted));

        let logged = viewer.events().len();
        viewer.tick();
        clock.advance(TICK * 10);
        assert_eq!(viewer.pump(), 0);
        assert_eq!(viewer.navigate(Direction::Backward), None);
        viewer.close();
        assert_eq!(viewer.events().len(), logged);
        drop(viewer);
        assert_eq!(closes.into_inner(), vec![CloseReason::Exhausted]);
    }

    #[test]
    fn pause_resume_continues_from_held_progress() {
        let stories = collection(&[1, 2]);
        let (mut viewer, _) = start(&stories, Some(Position::new(1, 1)));
        ticks(&mut viewer, 47);
        assert_eq!(viewer.progress(), Some(47.0));

        viewer.pause();
        ticks(&mut viewer, 30);
        assert_eq!(viewer.progress(), Some(47.0));
        assert!(viewer.live_timer().is_none());

        viewer.resume();
        viewer.tick();
        assert_eq!(viewer.progress(), Some(48.0));
    }

    #[test]
    fn navigation_resets_progress_in_destination() {
        let stories = collection(&[3]);
        let (mut viewer, _) = start(&stories, Some(Position::new(0, 1)));
        ticks(&mut viewer, 60);
        viewer.navigate(Direction::Backward);
        assert_eq!(viewer.position(), Some(Position::new(0, 0)));
        assert_eq!(viewer.progress(), Some(0.0));

        ticks(&mut viewer, 20);
        viewer.navigate(Direction::Forward);
        assert_eq!(viewer.position(), Some(Position::new(0, 1)));
        assert_eq!(viewer.progress(), Some(0.0));
        assert_eq!(viewer.fill(1), Some(Fill::Empty));
    }

    #[test]
    fn backward_at_origin_is_a_no_op() {
        let stories = collection(&[2]);
        let (mut viewer, _) = start(&stories, None);
        ticks(&mut viewer, 5);
        let timer = viewer.live_timer();

        assert_eq!(viewer.navigate(Direction::Backward), Some(Step::Stay));
        assert_eq!(viewer.position(), Some(Position::ORIGIN));
        assert_eq!(viewer.progress(), Some(5.0));
        assert!(!viewer.is_closed());
        assert_eq!(viewer.live_timer(), timer);
        assert_eq!(
            viewer.events().last().unwrap().kind,
            PlaybackEventKind::Stayed {
                at: Position::ORIGIN
            }
        );
    }

    #[test]
    fn backward_crosses_to_last_story_of_previous_group() {
        let stories = collection(&[3, 1]);
        let (mut viewer, _) = start(&stories, Some(Position::new(1, 0)));
        viewer.navigate(Direction::Backward);
        assert_eq!(viewer.position(), Some(Position::new(0, 2)));
        assert_eq!(
            viewer.progress_bars(),
            vec![Fill::Full, Fill::Full, Fill::Empty]
        );
    }

    #[test]
    fn navigation_while_paused_keeps_hold() {
        let stories = collection(&[2]);
        let (mut viewer, _) = start(&stories, None);
        viewer.pause();
        viewer.navigate(Direction::Forward);
        assert!(viewer.is_paused());
        assert_eq!(viewer.position(), Some(Position::new(0, 1)));
        assert!(viewer.live_timer().is_none());
        viewer.tick();
        assert_eq!(viewer.progress(), Some(0.0));
    }

    #[test]
    fn stale_timer_is_inert_after_navigation() {
        let stories = collection(&[3]);
        let (mut viewer, _) = start(&stories, None);
        let before = viewer.live_timer().unwrap();
        assert!(viewer.on_timer(before));
        assert_eq!(viewer.progress(), Some(1.0));

        viewer.navigate(Direction::Forward);
        let after = viewer.live_timer().unwrap();
        assert_ne!(before, after);
        assert!(!viewer.on_timer(before));
        assert_eq!(viewer.progress(), Some(0.0));
        assert!(viewer.on_timer(after));
        assert_eq!(viewer.progress(), Some(1.0));
    }

    #[test]
    fn stale_timer_is_inert_after_pause_and_resume() {
        let stories = collection(&[1]);
        let (mut viewer, _) = start(&stories, None);
        let before = viewer.live_timer().unwrap();

        viewer.pause();
        assert!(!viewer.on_timer(before));
        viewer.resume();
        assert!(!viewer.on_timer(before));
        assert_eq!(viewer.progress(), Some(0.0));
    }

    #[test]
    fn repeated_pause_or_resume_keeps_epoch() {
        let stories = collection(&[1]);
        let (mut viewer, _) = start(&stories, None);
        let playing = viewer.live_timer();
        viewer.resume();
        assert_eq!(viewer.live_timer(), playing);

        viewer.pause();
        let events = viewer.events().len();
        viewer.pause();
        assert_eq!(viewer.events().len(), events);
        assert!(viewer.live_timer().is_none());
    }

    #[test]
    fn pump_applies_elapsed_ticks() {
        let stories = collection(&[1, 2]);
        let (mut viewer, clock) = start(&stories, None);

        clock.advance(TICK * 10);
        assert_eq!(viewer.pump(), 10);
        assert_eq!(viewer.progress(), Some(10.0));

        clock.advance(TICK * 90 + TICK * 30);
        assert_eq!(viewer.pump(), 120);
        assert_eq!(viewer.position(), Some(Position::new(1, 0)));
        assert_eq!(viewer.progress(), Some(30.0));
    }

    #[test]
    fn pump_does_nothing_while_paused() {
        let stories = collection(&[1]);
        let (mut viewer, clock) = start(&stories, None);
        clock.advance(TICK * 5);
        viewer.pump();
        viewer.pause();
        clock.advance(Duration::from_secs(60));
        assert_eq!(viewer.pump(), 0);
        assert_eq!(viewer.progress(), Some(5.0));

        viewer.resume();
        clock.advance(TICK);
        assert_eq!(viewer.pump(), 1);
        assert_eq!(viewer.progress(), Some(6.0));
    }

    #[test]
    fn direct_delivery_consumes_the_due_tick() {
        let stories = collection(&[1]);
        let (mut viewer, clock) = start(&stories, None);
        clock.advance(TICK);
        let live = viewer.live_timer().unwrap();
        assert!(viewer.on_timer(live));
        assert_eq!(viewer.pump(), 0);
        assert_eq!(viewer.progress(), Some(1.0));

        clock.advance(TICK);
        assert_eq!(viewer.pump(), 1);
        assert_eq!(viewer.progress(), Some(2.0));
    }

    #[test]
    fn fractional_steps_finish_in_the_advertised_ticks() {
        let stories = collection(&[2]);
        let configs = [
            PlaybackConfig::default().with_progress_step(0.1),
            PlaybackConfig::default().with_progress_step(0.2),
            PlaybackConfig::default().with_story_duration(Duration::from_secs(3)),
        ];
        for config in configs {
            let expected = config.ticks_per_story();
            let mut viewer =
                PlaybackController::start(&stories, None, config, ManualClock::new()).unwrap();
            let mut applied = 0;
            while viewer.position() == Some(Position::ORIGIN) {
                viewer.tick();
                applied += 1;
                assert!(applied <= expected, "story overran {expected} ticks");
            }
            assert_eq!(applied, expected);
            assert_eq!(viewer.progress(), Some(0.0));
        }
    }

    #[test]
    fn story_duration_matches_wall_time() {
        let stories = collection(&[2]);
        let clock = ManualClock::new();
        let config = PlaybackConfig::default().with_story_duration(Duration::from_secs(3));
        let mut viewer =
            PlaybackController::start(&stories, None, config, clock.clone()).unwrap();

        clock.advance(Duration::from_secs(3) - TICK);
        viewer.pump();
        assert_eq!(viewer.position(), Some(Position::ORIGIN));
        clock.advance(TICK);
        viewer.pump();
        assert_eq!(viewer.position(), Some(Position::new(0, 1)));
    }

    #[test]
    fn default_event_log_is_bounded() {
        let stories = collection(&[1]);
        let (mut viewer, _) = start(&stories, None);
        for _ in 0..DEFAULT_MAX_EVENTS {
            viewer.pause();
            viewer.resume();
        }
        assert_eq!(viewer.events().len(), DEFAULT_MAX_EVENTS);
        assert_eq!(
            viewer.events().total_recorded(),
            2 * DEFAULT_MAX_EVENTS as u64 + 1
        );
    }

    #[test]
    fn exhaustion_inside_pump_cancels_timer_and_notifies_once() {
        let stories = collection(&[1]);
        let closes = RefCell::new(0);
        let (mut viewer, clock) = start(&stories, None);
        viewer.on_close(|_| *closes.borrow_mut() += 1);

        clock.advance(Duration::from_secs(30));
        assert_eq!(viewer.pump(), 100);
        assert_eq!(viewer.close_reason(), Some(CloseReason::Exhausted));
        assert!(viewer.live_timer().is_none());

        viewer.close();
        clock.advance(Duration::from_secs(30));
        assert_eq!(viewer.pump(), 0);
        drop(viewer);
        assert_eq!(closes.into_inner(), 1);
    }

    #[test]
    fn explicit_close_cancels_timer() {
        let stories = collection(&[2]);
        let (mut viewer, _) = start(&stories, None);
        let id = viewer.live_timer().unwrap();
        viewer.close();
        assert_eq!(viewer.close_reason(), Some(CloseReason::Explicit));
        assert!(viewer.live_timer().is_none());
        assert!(!viewer.on_timer(id));
        assert!(viewer.progress_bars().is_empty());
        assert!(viewer.current_story().is_none());
    }

    #[test]
    fn input_events_drive_the_controller() {
        let stories = collection(&[2]);
        let (mut viewer, _) = start(&stories, None);
        ticks(&mut viewer, 10);

        assert_eq!(
            viewer.handle_input(&InputEvent::PointerDown),
            Some(Command::Pause)
        );
        assert!(viewer.is_paused());
        viewer.handle_input(&InputEvent::PointerLeave);
        assert!(!viewer.is_paused());
        assert_eq!(viewer.progress(), Some(10.0));

        viewer.handle_input(&InputEvent::Tap {
            x: 150.0,
            width: 300.0,
        });
        assert_eq!(viewer.position(), Some(Position::ORIGIN));

        viewer.handle_input(&InputEvent::Tap {
            x: 290.0,
            width: 300.0,
        });
        assert_eq!(viewer.position(), Some(Position::new(0, 1)));

        viewer.handle_input(&InputEvent::TouchStart);
        viewer.handle_input(&InputEvent::TouchCancel);
        assert!(!viewer.is_paused());

        viewer.handle_input(&InputEvent::CloseButton);
        assert_eq!(viewer.close_reason(), Some(CloseReason::Explicit));
    }

    #[test]
    fn current_story_follows_position() {
        let stories = collection(&[1, 2]);
        let (mut viewer, _) = start(&stories, None);
        viewer.navigate(Direction::Forward);
        viewer.navigate(Direction::Forward);
        let story = viewer.current_story().unwrap();
        assert_eq!(story.content.text(), Some("story 1.1"));
        assert_eq!(viewer.current_group().unwrap().author.name, "author-1");
    }

    #[test]
    fn re_entering_a_story_starts_from_zero() {
        let stories = collection(&[2]);
        let (mut viewer, _) = start(&stories, None);
        ticks(&mut viewer, 70);
        viewer.navigate(Direction::Forward);
        viewer.navigate(Direction::Backward);
        assert_eq!(viewer.fill(0), Some(Fill::Empty));
        assert_eq!(viewer.fill(1), Some(Fill::Empty));
    }
}
