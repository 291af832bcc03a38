use std::fmt;
use std::time::{Duration, Instant};

// ── LoadTimer ─────────────────────────────────────────────────────────────

/// Timestamps of one gate, as an explicit state machine.
///
/// ```text
/// Unmounted ──mount──▶ Awaiting ──first non-empty──▶ Ready
///     │                                                ▲
///     └──────────mount with non-empty value────────────┘
/// ```
///
/// `started` is written once on mount; `completed` is written at most once.
/// `Ready` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadTimer {
    #[default]
    Unmounted,
    Awaiting { started: Instant },
    Ready { started: Instant, completed: Instant },
}

impl LoadTimer {
    /// Starts the timer at `now`.
    ///
    /// When the watched value is already populated there is no waiting period:
    /// the timer goes straight to `Ready` with a zero duration. Mounting twice
    /// is ignored.
    pub fn mount(&mut self, now: Instant, populated: bool) {
        if !matches!(self, LoadTimer::Unmounted) {
            log::warn!("load timer mounted twice; keeping the first start time");
            return;
        }
        *self = if populated {
            LoadTimer::Ready { started: now, completed: now }
        } else {
            LoadTimer::Awaiting { started: now }
        };
    }

    /// Records one observation of the watched value.
    ///
    /// Returns `true` only for the single observation that completes the timer.
    /// An observation before mount mounts the timer first.
    pub fn observe(&mut self, now: Instant, populated: bool) -> bool {
        match *self {
            LoadTimer::Unmounted => {
                self.mount(now, populated);
                false
            }
            LoadTimer::Awaiting { started } if populated => {
                *self = LoadTimer::Ready { started, completed: now };
                true
            }
            LoadTimer::Awaiting { .. } | LoadTimer::Ready { .. } => false,
        }
    }

    pub fn started(&self) -> Option<Instant> {
        match *self {
            LoadTimer::Unmounted => None,
            LoadTimer::Awaiting { started } | LoadTimer::Ready { started, .. } => Some(started),
        }
    }

    pub fn completed(&self) -> Option<Instant> {
        match *self {
            LoadTimer::Ready { completed, .. } => Some(completed),
            _ => None,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadTimer::Ready { .. })
    }

    /// `completed − started`, once both exist.
    pub fn elapsed(&self) -> Option<Duration> {
        match *self {
            LoadTimer::Ready { started, completed } => Some(completed.saturating_duration_since(started)),
            _ => None,
        }
    }

    /// Duration handed to the wrapped content. Zero until the timer is ready.
    pub fn loading_time(&self) -> LoadingTime {
        LoadingTime(self.elapsed().unwrap_or(Duration::ZERO))
    }
}

// ── LoadingTime ───────────────────────────────────────────────────────────

/// Elapsed loading time, displayed in seconds with two decimals (`"1.53"`).
///
/// Rounds half up at microsecond resolution, so 1005ms shows as `"1.01"`.
/// Rounding the float `1.005` would print `"1.00"`; integer micros avoid that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LoadingTime(pub Duration);

impl LoadingTime {
    #[inline]
    pub fn duration(self) -> Duration {
        self.0
    }

    /// Hundredths of a second, rounded half up.
    pub fn centiseconds(self) -> u128 {
        (self.0.as_micros() + 5_000) / 10_000
    }
}

impl fmt::Display for LoadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cs = self.centiseconds();
        write!(f, "{}.{:02}", cs / 100, cs % 100)
    }
}
