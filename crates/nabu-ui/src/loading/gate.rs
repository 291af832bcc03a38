use std::marker::PhantomData;

use nabu_engine::paint::Color;
use nabu_engine::time::{Clock, SystemClock};

use crate::component::Component;
use crate::constraints::Edges;
use crate::widget::Element;
use crate::widgets::container::Container;
use crate::widgets::text::Text;

use super::timer::{LoadTimer, LoadingTime};
use super::watch::WatchedProps;

pub const DEFAULT_PLACEHOLDER: &str = "Loading started...";

// ── TimedContent ──────────────────────────────────────────────────────────

/// Content wrapped by a [`LoadingGate`].
///
/// Receives exactly the props the gate received, plus the measured loading
/// time. It is only asked to render while the watched prop is populated.
pub trait TimedContent {
    type Props;

    fn view(&self, props: &Self::Props, loading_time: LoadingTime) -> Element;
}

/// Adapter turning a closure into [`TimedContent`]. Built by [`content_fn`].
pub struct FnContent<P, F> {
    f: F,
    _props: PhantomData<fn(&P)>,
}

/// Wraps `f` as gate content.
///
/// ```rust,ignore
/// let gate = LoadingGate::new("contacts", content_fn(|p: &FeedProps, t| feed_view(p, t)));
/// ```
pub fn content_fn<P, F>(f: F) -> FnContent<P, F>
where
    F: Fn(&P, LoadingTime) -> Element,
{
    FnContent { f, _props: PhantomData }
}

impl<P, F> TimedContent for FnContent<P, F>
where
    F: Fn(&P, LoadingTime) -> Element,
{
    type Props = P;

    fn view(&self, props: &P, loading_time: LoadingTime) -> Element {
        (self.f)(props, loading_time)
    }
}

// ── LoadingGate ───────────────────────────────────────────────────────────

/// Decorator that holds back `content` until the prop named `watched` is
/// populated, and reports how long that took.
///
/// - mount: start the timer
/// - every update: the first populated observation stops the timer
/// - every view: placeholder while the prop is empty, content otherwise
///
/// The placeholder decision follows the prop on every frame, so a prop that
/// empties out again brings the placeholder back. The timer never restarts.
///
/// # Example
/// ```rust,ignore
/// let mut feed = Mounted::new(LoadingGate::new("contacts", Feed::new()));
/// let root = feed.render(&props);
/// ```
pub struct LoadingGate<C, K = SystemClock> {
    watched: String,
    content: C,
    clock: K,
    timer: LoadTimer,
    placeholder: String,
    placeholder_color: Color,
}

impl<C: TimedContent> LoadingGate<C, SystemClock> {
    /// Gate timed by the wall clock.
    pub fn new(watched: impl Into<String>, content: C) -> Self {
        Self::with_clock(watched, content, SystemClock)
    }
}

impl<C: TimedContent, K: Clock> LoadingGate<C, K> {
    /// Gate timed by `clock`.
    pub fn with_clock(watched: impl Into<String>, content: C, clock: K) -> Self {
        Self {
            watched: watched.into(),
            content,
            clock,
            timer: LoadTimer::Unmounted,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            placeholder_color: Color::from_srgb_u8(173, 181, 189, 255),
        }
    }

    /// Replaces the text shown while waiting.
    pub fn placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    /// Name of the prop this gate waits for.
    pub fn watched(&self) -> &str {
        &self.watched
    }

    pub fn timer(&self) -> &LoadTimer {
        &self.timer
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    fn placeholder_view(&self) -> Element {
        Container::new()
            .padding(Edges::symmetric(1.0, 2.0))
            .child(Text::new(self.placeholder.as_str(), self.placeholder_color))
            .into()
    }
}

impl<C, K> Component for LoadingGate<C, K>
where
    C: TimedContent,
    C::Props: WatchedProps,
    K: Clock,
{
    type Props = C::Props;

    fn mount(&mut self, props: &C::Props) {
        let populated = !props.watched(&self.watched).is_empty();
        self.timer.mount(self.clock.now(), populated);
        if populated {
            log::debug!("`{}` already populated at mount; loading time is zero", self.watched);
        } else {
            log::debug!("waiting for `{}`", self.watched);
        }
    }

    fn update(&mut self, props: &C::Props) {
        let populated = !props.watched(&self.watched).is_empty();
        if self.timer.observe(self.clock.now(), populated) {
            log::info!("`{}` loaded in {}s", self.watched, self.timer.loading_time());
        }
    }

    fn view(&self, props: &C::Props) -> Element {
        if props.watched(&self.watched).is_empty() {
            self.placeholder_view()
        } else {
            self.content.view(props, self.timer.loading_time())
        }
    }
}
