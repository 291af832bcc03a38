//! Loading gate: show a placeholder until a watched prop is populated, then
//! render the wrapped content together with how long that took.
//!
//! - [`watch`] classifies prop values as empty / non-empty
//! - [`timer`] is the AWAITING → READY state machine holding the timestamps
//! - [`gate`] is the [`Component`](crate::component::Component) tying them together

pub mod gate;
pub mod timer;
pub mod watch;

pub use gate::{content_fn, FnContent, LoadingGate, TimedContent, DEFAULT_PLACEHOLDER};
pub use timer::{LoadTimer, LoadingTime};
pub use watch::{Watch, WatchedProps, WatchedValue};
