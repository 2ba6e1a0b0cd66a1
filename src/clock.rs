//! Frame pacing for the match loop
//!
//! The clock only caps the loop rate. A slow frame is not made up for
//! later; there is no catch-up or frame skipping.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Sleep out whatever is left of this frame's budget at `target_fps`
    /// and return the time since the previous call.
    fn tick(&mut self, target_fps: u32) -> Duration;
}

/// Wall-clock frame limiter
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        let frame_duration = frame_duration(target_fps);
        let elapsed = self.last_tick.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }

        let now = Instant::now();
        let since_last = now - self.last_tick;
        self.last_tick = now;
        since_last
    }
}

/// Per-frame time budget; a rate of zero is treated as one frame per second
pub fn frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs(1) / target_fps.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_caps_rate() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        for _ in 0..3 {
            let dt = clock.tick(200);
            assert!(dt >= Duration::from_millis(5));
        }
        assert!(start.elapsed() >= Duration::from_millis(14));
    }
}
