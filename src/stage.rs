//! The environment an animation runs in.

use crate::interrupt::Interrupt;
use crate::rendering::renderer::{Renderer, TerminalRenderer};
use crate::util::frameclock::{Sleeper, ThreadSleeper};
use std::io::Stdout;

/// Bundles everything an animation call needs besides its parameters: where to
/// draw, how to wait between frames, and when to give up.
///
/// # Example
/// ```rust ,no_run
/// use voidfx::config::WaveConfig;
/// use voidfx::animations::wave::WaveRenderer;
/// use voidfx::interrupt;
/// use voidfx::stage::Stage;
///
/// let mut stage = Stage::stdout(interrupt::sigint().unwrap());
/// WaveRenderer::new(WaveConfig::default())
///     .run(&mut stage, "to stare off into the distance")
///     .unwrap();
/// ```
pub struct Stage<R: Renderer, S: Sleeper = ThreadSleeper> {
    pub(crate) renderer: R,
    pub(crate) sleeper: S,
    pub(crate) interrupt: Interrupt,
}

impl Stage<TerminalRenderer<Stdout>> {
    /// A stage drawing to stdout, sleeping for real.
    pub fn stdout(interrupt: Interrupt) -> Self {
        Self::new(TerminalRenderer::stdout(), ThreadSleeper, interrupt)
    }
}

impl<R: Renderer, S: Sleeper> Stage<R, S> {
    pub fn new(renderer: R, sleeper: S, interrupt: Interrupt) -> Self {
        Self {
            renderer,
            sleeper,
            interrupt,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }

    /// Takes the stage apart again.
    pub fn into_parts(self) -> (R, S, Interrupt) {
        (self.renderer, self.sleeper, self.interrupt)
    }
}
