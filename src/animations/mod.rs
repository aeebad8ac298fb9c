//! The two animations.
//!
//! *   [`wave`]: sweeps a sinusoidal highlight back and forth over a line of text.
//! *   [`void`]: spirals the text into a black hole, explodes it and lets the ashes fade.
//!
//! Both are plain frame loops over a [`Stage`](crate::stage::Stage): compute a frame,
//! write it through the stage's renderer, flush, and let a
//! [`FrameClock`](crate::util::frameclock::FrameClock) sleep off the rest of the budget.

pub mod glyphs;
pub mod void;
pub mod wave;
