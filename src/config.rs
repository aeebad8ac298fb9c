//! Parameters of the two animations.
//!
//! Everything an animation needs to know about pacing and durations is passed in
//! explicitly through these structs; there is no global animation state.

use crate::util::frameclock::budget_from_secs;
use std::time::Duration;

/// Parameters of the wave-highlight sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveConfig {
    /// Seconds between two sweep frames. Not validated; anything below zero means "don't wait".
    pub delay: f64,
    /// Oscillation multiplier of the highlight. Zero or negative values give a flat highlight.
    pub wave_speed: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            delay: 0.02,
            wave_speed: 3.0,
        }
    }
}

impl WaveConfig {
    pub fn frame_time(&self) -> Duration {
        budget_from_secs(self.delay)
    }
}

/// Parameters of the black hole animation.
#[derive(Clone, Debug, PartialEq)]
pub struct VoidConfig {
    /// Seconds the spiral consumption phase lasts.
    pub duration: f64,
    /// Frame rate of all three phases.
    pub fps: f64,
    /// Seconds the explosion phase lasts.
    pub explosion_duration: f64,
    /// Number of frames in the fade-out phase.
    pub fade_frames: usize,
    /// Printed at the center once the void has closed.
    pub completion_message: String,
}

impl Default for VoidConfig {
    fn default() -> Self {
        Self {
            duration: 6.0,
            fps: 25.0,
            explosion_duration: 2.0,
            fade_frames: 20,
            completion_message: "Text consumed by the void.".to_string(),
        }
    }
}

impl VoidConfig {
    /// The default configuration with a different spiral duration.
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Frames in the spiral phase. Always at least one.
    pub fn spiral_frame_count(&self) -> usize {
        ((self.duration * self.fps).floor() as usize).max(1)
    }

    /// Frames in the explosion phase.
    pub fn explosion_frame_count(&self) -> usize {
        (self.explosion_duration * self.fps).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_counts() {
        let config = VoidConfig::default();
        assert_eq!(config.spiral_frame_count(), 150);
        assert_eq!(config.explosion_frame_count(), 50);
        assert_eq!(config.fade_frames, 20);
    }

    #[test]
    fn test_short_durations_still_render_a_frame() {
        assert_eq!(VoidConfig::with_duration(0.04).spiral_frame_count(), 1);
        assert_eq!(VoidConfig::with_duration(0.0).spiral_frame_count(), 1);
        assert_eq!(VoidConfig::with_duration(-3.0).spiral_frame_count(), 1);
    }

    #[test]
    fn test_wave_frame_time() {
        assert_eq!(WaveConfig::default().frame_time(), Duration::from_millis(20));
        let config = WaveConfig {
            delay: -0.5,
            ..WaveConfig::default()
        };
        assert_eq!(config.frame_time(), Duration::ZERO);
    }
}
