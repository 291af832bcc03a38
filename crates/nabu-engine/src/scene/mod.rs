//! Draw stream: commands recorded per frame, replayed back-to-front by a
//! rasterizer.

mod cmd;
mod list;

pub use cmd::{DrawCmd, RectCmd, TextCmd, ZIndex};
pub use list::{DrawItem, DrawList, SortKey};
