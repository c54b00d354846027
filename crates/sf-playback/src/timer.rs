use std::fmt;
use std::time::Duration;

/// Identifies one timer epoch. A new id is issued every time the slot is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// One due expiry of a repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firing {
    /// The epoch that fired.
    pub timer: TimerId,
    /// The instant the expiry was due, on the controller's clock.
    pub at: Duration,
}

#[derive(Debug, Clone, Copy)]
struct ArmedTimer {
    id: TimerId,
    period: Duration,
    next_due: Duration,
}

/// Holds at most one repeating timer.
///
/// Arming replaces whatever was armed before, so two epochs can never be
/// live at once. Firings are pulled with [`TimerSlot::poll`].
#[derive(Debug, Default)]
pub struct TimerSlot {
    armed: Option<ArmedTimer>,
    issued: u64,
}

impl TimerSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the current epoch (if any) and start a new one at `now`.
    ///
    /// The first expiry is due one `period` after `now`.
    pub fn arm(&mut self, now: Duration, period: Duration) -> TimerId {
        // A zero period would make `poll` yield forever.
        let period = period.max(Duration::from_nanos(1));
        self.issued += 1;
        let id = TimerId(self.issued);
        self.armed = Some(ArmedTimer {
            id,
            period,
            next_due: now + period,
        });
        id
    }

    /// Cancel the current epoch. Returns the cancelled id.
    pub fn disarm(&mut self) -> Option<TimerId> {
        self.armed.take().map(|t| t.id)
    }

    /// The live epoch, if any.
    pub fn live(&self) -> Option<TimerId> {
        self.armed.map(|t| t.id)
    }

    /// Whether `id` is the live epoch.
    pub fn is_live(&self, id: TimerId) -> bool {
        self.live() == Some(id)
    }

    /// When the live epoch next fires.
    pub fn next_due(&self) -> Option<Duration> {
        self.armed.map(|t| t.next_due)
    }

    /// Record that `id` fired at `now` through direct delivery.
    ///
    /// The next expiry moves to one period after `now`, so a later
    /// [`TimerSlot::poll`] does not yield the same expiry again. Returns
    /// false if `id` is not the live epoch.
    pub fn acknowledge(&mut self, id: TimerId, now: Duration) -> bool {
        match self.armed.as_mut() {
            Some(armed) if armed.id == id => {
                armed.next_due = now + armed.period;
                true
            }
            _ => false,
        }
    }

    /// Yield the next expiry due at or before `now`, one at a time.
    pub fn poll(&mut self, now: Duration) -> Option<Firing> {
        let armed = self.armed.as_mut()?;
        if armed.next_due > now {
            return None;
        }
        let at = armed.next_due;
        armed.next_due += armed.period;
        Some(Firing { timer: armed.id, at })
    }
}
