use crate::widget::Element;

// ── Component trait ───────────────────────────────────────────────────────

/// A stateful unit that turns props into a widget tree every frame.
///
/// Widgets are rebuilt from scratch each frame; a component is the piece that
/// survives between frames and decides what to build. The lifecycle is driven
/// by [`Mounted`]:
///
/// 1. first frame: [`mount`](Self::mount), then [`view`](Self::view)
/// 2. every later frame: [`update`](Self::update), then [`view`](Self::view)
pub trait Component {
    type Props;

    /// Called once, before the first `view`.
    fn mount(&mut self, _props: &Self::Props) {}

    /// Called before every `view` after the first.
    fn update(&mut self, _props: &Self::Props) {}

    /// Build this frame's widget tree from `props`.
    fn view(&self, props: &Self::Props) -> Element;
}

// ── Mounted ───────────────────────────────────────────────────────────────

/// Lifecycle host for one [`Component`] instance.
pub struct Mounted<C: Component> {
    component: C,
    mounted: bool,
    renders: u64,
}

impl<C: Component> Mounted<C> {
    pub fn new(component: C) -> Self {
        Self { component, mounted: false, renders: 0 }
    }

    /// Runs the lifecycle hook for this frame and returns the component's view.
    pub fn render(&mut self, props: &C::Props) -> Element {
        if self.mounted {
            self.component.update(props);
        } else {
            log::debug!("mounting {}", std::any::type_name::<C>());
            self.component.mount(props);
            self.mounted = true;
        }
        self.renders += 1;
        self.component.view(props)
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of completed `render` calls.
    #[inline]
    pub fn renders(&self) -> u64 {
        self.renders
    }

    #[inline]
    pub fn component(&self) -> &C {
        &self.component
    }
}
