use std::time::Duration;

/// Source of repeating timers.
///
/// A handle stays live until it is passed back to [`Scheduler::cancel`].
/// Cancellation is synchronous: a cancelled timer never fires again.
pub trait Scheduler {
    type Handle;

    fn start_repeating(&mut self, period: Duration) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Repeating {
    id: TimerId,
    period: Duration,
    elapsed: Duration,
}

impl Repeating {
    // Fires at most once per call; whole periods missed during a long frame are dropped.
    fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.period {
            return false;
        }
        self.elapsed = if self.period.is_zero() {
            Duration::ZERO
        } else {
            let rest = self.elapsed.as_nanos() % self.period.as_nanos();
            Duration::from_nanos(rest as u64)
        };
        true
    }
}

/// Frame-driven scheduler for render loops.
///
/// Time only moves when the owner calls [`FrameClock::advance`] with the frame
/// delta, the same way a render loop accumulates `dt` towards a display duration.
#[derive(Debug, Default)]
pub struct FrameClock {
    next_id: u64,
    timers: Vec<Repeating>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances every live timer by `dt` and returns how many of them fired.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.timers.iter_mut().map(|t| t.tick(dt)).filter(|fired| *fired).count()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.find(id).is_some()
    }

    /// Time accumulated towards the next fire of `id`, if it is still live.
    pub fn elapsed(&self, id: TimerId) -> Option<Duration> {
        self.find(id).map(|t| t.elapsed)
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    fn find(&self, id: TimerId) -> Option<&Repeating> {
        self.timers.iter().find(|t| t.id == id)
    }
}

impl Scheduler for FrameClock {
    type Handle = TimerId;

    fn start_repeating(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Repeating { id, period, elapsed: Duration::ZERO });
        id
    }

    fn cancel(&mut self, handle: TimerId) {
        self.timers.retain(|t| t.id != handle);
    }
}
