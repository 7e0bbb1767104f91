use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,

    /// Exponentially smoothed frames-per-second estimate.
    ///
    /// Suitable for status displays; do not use it for simulation stepping.
    pub smoothed_fps: f32,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so downstream consumers stay stable when the
/// process is paused by a debugger, minimized, or briefly stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    smoothed_dt: Option<f32>,
}

/// Smoothing weight applied to the newest delta-time sample.
const FPS_SMOOTHING: f32 = 0.1;

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            smoothed_dt: None,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from
    /// suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
        self.smoothed_dt = None;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max)
            .as_secs_f32();
        self.last = now;

        let smoothed = match self.smoothed_dt {
            Some(prev) => prev + (dt - prev) * FPS_SMOOTHING,
            None => dt,
        };
        self.smoothed_dt = Some(smoothed);

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
            smoothed_fps: if smoothed > 0.0 { 1.0 / smoothed } else { 0.0 },
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
    }

    #[test]
    fn dt_respects_clamps() {
        let mut clock = FrameClock::new();
        // Two immediate ticks produce a dt at the lower clamp, never zero.
        clock.tick();
        let ft = clock.tick();
        assert!(ft.dt >= 0.0001);
        assert!(ft.dt <= 0.25);
    }

    #[test]
    fn smoothed_fps_is_positive_after_ticks() {
        let mut clock = FrameClock::new();
        clock.tick();
        let ft = clock.tick();
        assert!(ft.smoothed_fps > 0.0);
    }
}
