use std::time::{Duration, Instant};

use super::{Clock, SystemClock};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One per render loop. Delta time is clamped so a stalled loop (suspended
/// terminal, blocked stdout) does not hand downstream code a huge step.
#[derive(Debug, Clone)]
pub struct FrameClock<K: Clock = SystemClock> {
    clock: K,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock<SystemClock> {
    /// Creates a wall-clock frame clock with default clamps.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FrameClock<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clock> FrameClock<K> {
    /// Creates a frame clock reading from `clock`, clamped to [100µs, 250ms].
    pub fn with_clock(clock: K) -> Self {
        Self::with_clamps(clock, Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a frame clock with custom delta-time clamps.
    pub fn with_clamps(clock: K, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let last = clock.now();
        Self { clock, last, frame_index: 0, dt_min, dt_max }
    }

    /// Resets the clock baseline.
    pub fn reset(&mut self) {
        self.last = self.clock.now();
    }

    /// Number of ticks so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = self.clock.now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}
