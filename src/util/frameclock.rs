//! Fixed-rate frame pacing.
//!
//! Every animation frame is a unit of work: compute, write, flush, then sleep for
//! whatever is left of the frame budget. A [`FrameClock`] does the measuring and
//! sleeping, and polls the [`Interrupt`] flag once the frame is over.
//!
//! Overruns are absorbed: if a frame takes longer than its budget, the next frame
//! starts immediately. There is no catch-up and no frame dropping.

use crate::interrupt::Interrupt;
use std::io;
use std::time::{Duration, Instant};

/// Something that can block the current thread for a while.
///
/// The animations only ever sleep through this trait, so tests can swap in a
/// sleeper that records the requested durations instead of waiting.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// The real sleeper, backed by [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &mut S {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Converts a user supplied number of seconds into a frame budget.
///
/// Negative and NaN values become zero, and so do values too large to represent.
pub fn budget_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::ZERO)
}

/// Paces a render loop at a fixed frame budget.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use voidfx::interrupt::Interrupt;
/// use voidfx::util::frameclock::{FrameClock, ThreadSleeper};
///
/// let interrupt = Interrupt::new();
/// let mut sleeper = ThreadSleeper;
/// let mut clock = FrameClock::new(Duration::from_millis(1), &mut sleeper, &interrupt);
/// for _ in 0..3 {
///     clock.start_frame();
///     // render the frame
///     clock.end_frame().unwrap();
/// }
/// assert_eq!(clock.frames(), 3);
/// ```
pub struct FrameClock<'a, S: Sleeper + ?Sized> {
    frame_time: Duration,
    sleeper: &'a mut S,
    interrupt: &'a Interrupt,
    frame_start: Instant,
    frames: u64,
}

impl<'a, S: Sleeper + ?Sized> FrameClock<'a, S> {
    /// Create a new clock that gives every frame `frame_time` of wall time.
    pub fn new(frame_time: Duration, sleeper: &'a mut S, interrupt: &'a Interrupt) -> Self {
        Self {
            frame_time,
            sleeper,
            interrupt,
            frame_start: Instant::now(),
            frames: 0,
        }
    }

    /// Create a new clock that gives every frame `1.0 / rate` seconds.
    pub fn new_from_rate_per_second(
        rate: f64,
        sleeper: &'a mut S,
        interrupt: &'a Interrupt,
    ) -> Self {
        Self::new(budget_from_secs(1.0 / rate), sleeper, interrupt)
    }

    /// The budget of a single frame.
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Number of frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Marks the beginning of a frame's work.
    pub fn start_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleeps for the residual of the frame budget, then checks for interruption.
    ///
    /// Returns an [`io::ErrorKind::Interrupted`] error once the interrupt flag is set.
    pub fn end_frame(&mut self) -> io::Result<()> {
        let elapsed = self.frame_start.elapsed();
        let remaining = self.frame_time.saturating_sub(elapsed);
        self.sleeper.sleep(remaining);
        self.frames += 1;
        self.interrupt.check()
    }
}
