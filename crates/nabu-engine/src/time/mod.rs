//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to the runtime:
//! - `Clock` abstracts "now" so timers can be driven by a `ManualClock` in tests
//! - one `FrameClock` per render loop; call `tick()` once per presented frame

mod clock;
mod frame_clock;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};
