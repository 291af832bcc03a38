use nabu_ui::prelude::*;

use crate::contacts::Contact;

pub const TITLE: &str = "Higher Order Component (HOC)";

/// Name of the prop the feed's gate waits for.
pub const CONTACTS: &str = "contacts";

fn text_color() -> Color {
    Color::from_srgb_u8(233, 236, 239, 255)
}

fn dim_color() -> Color {
    Color::from_srgb_u8(134, 142, 150, 255)
}

fn bar_color() -> Color {
    Color::from_srgb_u8(52, 58, 64, 255)
}

// ── props ─────────────────────────────────────────────────────────────────

/// Props of the feed. Empty until the fetch delivers.
#[derive(Debug, Clone, Default)]
pub struct FeedProps {
    pub contacts: Vec<Contact>,
}

impl WatchedProps for FeedProps {
    fn watched(&self, name: &str) -> WatchedValue {
        match name {
            CONTACTS => self.contacts.watch(),
            _ => WatchedValue::Absent,
        }
    }
}

// ── Feed ──────────────────────────────────────────────────────────────────

/// Contact list followed by the loading time line.
#[derive(Debug, Default)]
pub struct Feed;

impl Feed {
    /// The feed behind a gate on `contacts`.
    pub fn gated<K: nabu_engine::time::Clock>(clock: K) -> LoadingGate<Feed, K> {
        LoadingGate::with_clock(CONTACTS, Feed, clock)
    }
}

impl TimedContent for Feed {
    type Props = FeedProps;

    fn view(&self, props: &FeedProps, loading_time: LoadingTime) -> Element {
        Column::new()
            .spacing(1.0)
            .children(props.contacts.iter().map(feed_item))
            .child(Text::new(format!("Loading time {loading_time} seconds"), text_color()))
            .into()
    }
}

fn feed_item(contact: &Contact) -> Element {
    Column::new()
        .child(Text::new(format!("{} <{}>", contact.name, contact.email), text_color()))
        .child(Text::new(contact.thumbnail.as_str(), dim_color()))
        .into()
}

/// Dark title bar across the top of the screen.
pub fn title_bar() -> Element {
    Container::new()
        .padding(Edges::symmetric(1.0, 2.0))
        .background(bar_color())
        .child(Text::new(TITLE, Color::white()))
        .into()
}

/// Whole screen: title bar above the (gated) feed view.
pub fn screen(feed: Element) -> Element {
    Column::new()
        .child(title_bar())
        .child(Container::new().padding(Edges::symmetric(1.0, 2.0)).child(feed))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nabu_ui::scene::render_plain;

    fn ava() -> Contact {
        Contact {
            name: "Ava Lindqvist".into(),
            email: "ava@example.com".into(),
            thumbnail: "https://example.com/a.jpg".into(),
        }
    }

    #[test]
    fn watches_contacts_only() {
        let props = FeedProps { contacts: vec![ava()] };
        assert!(!props.watched(CONTACTS).is_empty());
        assert!(props.watched("users").is_empty());
        assert!(FeedProps::default().watched(CONTACTS).is_empty());
    }

    #[test]
    fn lists_contacts_then_loading_time() {
        let props = FeedProps { contacts: vec![ava(), ava()] };
        let out = render_plain(Feed.view(&props, LoadingTime(std::time::Duration::from_millis(1530))), 40, 8);
        assert_eq!(
            out,
            "Ava Lindqvist <ava@example.com>\n\
             https://example.com/a.jpg\n\
             \n\
             Ava Lindqvist <ava@example.com>\n\
             https://example.com/a.jpg\n\
             \n\
             Loading time 1.53 seconds\n"
        );
    }

    #[test]
    fn screen_puts_title_above_content() {
        let out = render_plain(screen(Text::new("body", Color::white()).into()), 40, 7);
        assert_eq!(out, "\n  Higher Order Component (HOC)\n\n\n  body\n\n");
    }
}
