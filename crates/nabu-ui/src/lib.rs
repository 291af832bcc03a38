//! Nabu UI — widget tree on top of `nabu-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use nabu_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let draw_list = scene.frame(
//!     Column::new()
//!         .spacing(1.0)
//!         .child(Text::new("Hello!", Color::white()))
//!         .into(),
//!     Vec2::new(80.0, 24.0),
//! );
//! canvas.rasterize(draw_list);
//! ```
//!
//! # Stateful components
//!
//! A [`Component`](component::Component) keeps state across frames and builds
//! a fresh widget tree from its props every frame. Drive it with
//! [`Mounted`](component::Mounted). [`LoadingGate`](loading::LoadingGate) is
//! a component that decorates any [`TimedContent`](loading::TimedContent).

pub mod component;
pub mod constraints;
pub mod loading;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build UI — import this in your component files.
pub mod prelude {
    pub use crate::component::{Component, Mounted};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::loading::{
        content_fn, LoadTimer, LoadingGate, LoadingTime, TimedContent, Watch, WatchedProps,
        WatchedValue,
    };
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        container::Container,
        column::Column,
        text::Text,
    };

    // Re-export the engine primitives everyone needs.
    pub use nabu_engine::coords::{Rect, Vec2};
    pub use nabu_engine::paint::Color;
}
