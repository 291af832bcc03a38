use std::io::Write;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use nabu_engine::render::TextCanvas;
use nabu_engine::time::{Clock, FrameClock, SystemClock};
use nabu_ui::prelude::*;

use crate::config::StudioConfig;
use crate::contacts::{self, FetchResult};
use crate::feed::{self, Feed, FeedProps};

/// One rasterized frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub text: String,
    /// The feed (not the placeholder) is on screen.
    pub ready: bool,
}

// ── FeedApp ───────────────────────────────────────────────────────────────

/// Owns the gated feed and everything needed to turn it into text frames.
pub struct FeedApp<K: Clock = SystemClock> {
    feed: Mounted<LoadingGate<Feed, K>>,
    props: FeedProps,
    scene: UiScene,
    canvas: TextCanvas,
    width: usize,
    height: Option<usize>,
    ansi: bool,
}

impl<K: Clock> FeedApp<K> {
    pub fn new(clock: K, width: usize, height: Option<usize>, ansi: bool) -> Self {
        Self {
            feed: Mounted::new(Feed::gated(clock)),
            props: FeedProps::default(),
            scene: UiScene::new(),
            canvas: TextCanvas::new(width, height.unwrap_or(1)),
            width,
            height,
            ansi,
        }
    }

    /// Feeds the fetch outcome into the props. A failure leaves the list
    /// empty, so the placeholder stays up.
    pub fn receive(&mut self, result: FetchResult) {
        match result {
            Ok(contacts) => {
                log::info!("received {} contacts", contacts.len());
                self.props.contacts = contacts;
            }
            Err(err) => log::error!("could not load contacts: {err}"),
        }
    }

    pub fn props(&self) -> &FeedProps {
        &self.props
    }

    /// Runs one lifecycle step and rasterizes the screen.
    pub fn frame(&mut self) -> Frame {
        let root = feed::screen(self.feed.render(&self.props));

        let width = self.width as f32;
        let rows = match self.height {
            Some(rows) => rows,
            None => {
                let ctx = LayoutCtx { metrics: &self.scene.metrics };
                let size = root.measure(Constraints::loose(Vec2::new(width, f32::INFINITY)), &ctx);
                size.y.ceil().max(1.0) as usize
            }
        };
        if self.canvas.cols() != self.width || self.canvas.rows() != rows {
            self.canvas = TextCanvas::new(self.width, rows);
        }

        let draw_list = self.scene.frame(root, Vec2::new(width, rows as f32));
        self.canvas.rasterize(draw_list);

        let text = if self.ansi { self.canvas.to_ansi_string() } else { self.canvas.to_plain_string() };
        let ready = self.feed.component().timer().is_ready()
            && !self.props.watched(feed::CONTACTS).is_empty();

        Frame { text, ready }
    }
}

// ── run loop ──────────────────────────────────────────────────────────────

/// Polls the fetch, renders a frame per tick, prints frames that changed,
/// and returns after the first frame that shows the feed.
pub fn run(config: StudioConfig) -> anyhow::Result<()> {
    let rx = contacts::spawn_fetch(config.endpoint.clone(), config.count)
        .context("failed to start the fetch thread")?;

    let mut app = FeedApp::new(SystemClock, config.width, config.height, config.ansi);
    let mut clock = FrameClock::new();
    let mut pending = Some(rx);
    let mut last = String::new();
    let stdout = std::io::stdout();

    loop {
        let tick = clock.tick();
        log::trace!("frame {} (dt {:.3}s)", tick.frame_index, tick.dt);

        if let Some(result) = poll(&mut pending) {
            app.receive(result);
        }

        let frame = app.frame();
        if frame.text != last {
            let mut out = stdout.lock();
            if config.ansi {
                // Home the cursor and clear, then redraw in place.
                write!(out, "\x1b[H\x1b[2J")?;
            }
            writeln!(out, "{}", frame.text)?;
            out.flush()?;
            last = frame.text;
        }

        if frame.ready {
            return Ok(());
        }

        thread::sleep(frame_delay(config.frame_interval, tick.now.elapsed()));
    }
}

/// Sleep left in a frame of length `interval` once `spent` of it went to work.
fn frame_delay(interval: Duration, spent: Duration) -> Duration {
    interval.saturating_sub(spent)
}

/// Takes the fetch result if it has arrived. A worker that died without
/// answering is logged once and the channel is dropped.
fn poll(pending: &mut Option<Receiver<FetchResult>>) -> Option<FetchResult> {
    let rx = pending.as_ref()?;
    match rx.try_recv() {
        Ok(result) => {
            *pending = None;
            Some(result)
        }
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => {
            log::error!("fetch thread exited without a result");
            *pending = None;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::mpsc;
    use std::time::Duration;

    use nabu_engine::time::ManualClock;

    use super::*;
    use crate::contacts::{Contact, FetchError};

    fn contacts(n: usize) -> Vec<Contact> {
        (0..n)
            .map(|i| Contact {
                name: format!("User {i}"),
                email: format!("user{i}@example.com"),
                thumbnail: format!("https://example.com/{i}.jpg"),
            })
            .collect()
    }

    fn app(clock: &Rc<ManualClock>) -> FeedApp<Rc<ManualClock>> {
        FeedApp::new(Rc::clone(clock), 48, None, false)
    }

    #[test]
    fn placeholder_until_contacts_arrive() {
        let clock = Rc::new(ManualClock::new());
        let mut app = app(&clock);

        let frame = app.frame();
        assert!(!frame.ready);
        assert!(frame.text.contains("Higher Order Component (HOC)"));
        assert!(frame.text.contains("Loading started..."));

        clock.advance(Duration::from_millis(400));
        app.receive(Ok(contacts(3)));
        let frame = app.frame();
        assert!(frame.ready);
        assert!(!frame.text.contains("Loading started..."));
        assert!(frame.text.contains("User 2 <user2@example.com>"));
        assert!(frame.text.contains("Loading time 0.40 seconds"));
    }

    #[test]
    fn height_fits_content_by_default() {
        let clock = Rc::new(ManualClock::new());
        let mut app = app(&clock);
        let _ = app.frame();
        app.receive(Ok(contacts(2)));

        // title (3) + padding (2) + 2 items × 2 rows + 2 gaps + loading line
        let frame = app.frame();
        assert_eq!(frame.text.split('\n').count(), 3 + 2 + 4 + 2 + 1);
    }

    #[test]
    fn failed_fetch_keeps_placeholder() {
        let clock = Rc::new(ManualClock::new());
        let mut app = app(&clock);
        let _ = app.frame();

        app.receive(Err(FetchError::Status(503)));
        clock.advance(Duration::from_secs(5));
        let frame = app.frame();

        assert!(!frame.ready);
        assert!(frame.text.contains("Loading started..."));
        assert!(app.props().contacts.is_empty());
    }

    #[test]
    fn empty_result_is_not_ready() {
        let clock = Rc::new(ManualClock::new());
        let mut app = app(&clock);
        let _ = app.frame();
        app.receive(Ok(Vec::new()));
        assert!(!app.frame().ready);
    }

    #[test]
    fn poll_takes_result_once() {
        let (tx, rx) = mpsc::channel();
        let mut pending = Some(rx);
        assert!(poll(&mut pending).is_none());

        tx.send(Ok(contacts(1))).unwrap();
        assert!(matches!(poll(&mut pending), Some(Ok(c)) if c.len() == 1));
        assert!(pending.is_none());
        assert!(poll(&mut pending).is_none());
    }

    #[test]
    fn frame_delay_subtracts_work() {
        let interval = Duration::from_millis(100);
        assert_eq!(frame_delay(interval, Duration::from_millis(30)), Duration::from_millis(70));
        assert_eq!(frame_delay(interval, Duration::ZERO), interval);
    }

    #[test]
    fn slow_frame_does_not_sleep() {
        let interval = Duration::from_millis(100);
        assert_eq!(frame_delay(interval, Duration::from_millis(250)), Duration::ZERO);
    }

    #[test]
    fn poll_drops_dead_channel() {
        let (tx, rx) = mpsc::channel::<FetchResult>();
        drop(tx);
        let mut pending = Some(rx);
        assert!(poll(&mut pending).is_none());
        assert!(pending.is_none());
    }
}
