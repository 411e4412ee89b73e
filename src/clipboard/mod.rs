//! System clipboard writes (arboard), reported back as app events
//!
//! One worker owns the clipboard for the whole session. On X11 and Wayland
//! the copied text is served by the process that set it, so the handle
//! must outlive each copy.

use crate::app::events::{ClipboardEvent, Event};
use crate::palette::Rgb;
use anyhow::Context;
use tokio::sync::mpsc;

/// Anything that can take a line of text.
pub trait TextSink {
    fn write_text(&mut self, text: String) -> anyhow::Result<()>;
}

impl TextSink for arboard::Clipboard {
    fn write_text(&mut self, text: String) -> anyhow::Result<()> {
        self.set_text(text).context("write clipboard")
    }
}

fn open_system() -> anyhow::Result<arboard::Clipboard> {
    arboard::Clipboard::new().context("open clipboard")
}

/// Sender side of the clipboard worker. Dropping it stops the worker.
#[derive(Debug, Clone)]
pub struct ClipboardHandle {
    requests: mpsc::UnboundedSender<Rgb>,
}

impl ClipboardHandle {
    /// Starts the worker; outcomes arrive on `events` as `Event::Clipboard`.
    pub fn spawn(events: mpsc::Sender<Event>) -> Self {
        let (requests, rx) = mpsc::unbounded_channel();
        tokio::task::spawn_blocking(move || serve(rx, &events, open_system));
        Self { requests }
    }

    /// Queue the color's hex code for copying.
    pub fn copy(&self, color: Rgb) {
        if self.requests.send(color).is_err() {
            tracing::warn!(%color, "clipboard worker has stopped");
        }
    }
}

/// Worker loop. The sink is opened lazily, kept after a successful write, and
/// reopened on the next request after any failure.
fn serve<S: TextSink>(
    mut requests: mpsc::UnboundedReceiver<Rgb>,
    events: &mpsc::Sender<Event>,
    mut open: impl FnMut() -> anyhow::Result<S>,
) {
    let mut held: Option<S> = None;

    while let Some(color) = requests.blocking_recv() {
        let written = match held.take() {
            Some(sink) => Ok(sink),
            None => open(),
        }
        .and_then(|mut sink| {
            sink.write_text(color.to_hex())?;
            Ok(sink)
        });

        let event = match written {
            Ok(sink) => {
                held = Some(sink);
                ClipboardEvent::Copied { color }
            }
            Err(e) => ClipboardEvent::Failed {
                color,
                error: format!("{e:#}"),
            },
        };

        if events.blocking_send(Event::Clipboard(event)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeSink {
        written: Rc<RefCell<Vec<String>>>,
        reject: Option<&'static str>,
    }

    impl TextSink for FakeSink {
        fn write_text(&mut self, text: String) -> anyhow::Result<()> {
            if self.reject == Some(text.as_str()) {
                anyhow::bail!("selection lost");
            }
            self.written.borrow_mut().push(text);
            Ok(())
        }
    }

    fn outcomes(rx: &mut mpsc::Receiver<Event>) -> Vec<Result<Rgb, String>> {
        let mut out = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Clipboard(ClipboardEvent::Copied { color }) => out.push(Ok(color)),
                Event::Clipboard(ClipboardEvent::Failed { error, .. }) => out.push(Err(error)),
                Event::Input(_) => panic!("unexpected input event"),
            }
        }
        out
    }

    #[test]
    fn test_one_clipboard_serves_every_copy() {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (ev_tx, mut ev_rx) = mpsc::channel(8);
        let written = Rc::new(RefCell::new(Vec::new()));
        let mut opens = 0;

        req_tx.send(Rgb::new(255, 0, 0)).unwrap();
        req_tx.send(Rgb::new(0, 0, 255)).unwrap();
        drop(req_tx);

        serve(req_rx, &ev_tx, || {
            opens += 1;
            Ok(FakeSink {
                written: Rc::clone(&written),
                reject: None,
            })
        });

        assert_eq!(opens, 1);
        assert_eq!(*written.borrow(), vec!["#FF0000", "#0000FF"]);
        assert_eq!(
            outcomes(&mut ev_rx),
            vec![Ok(Rgb::new(255, 0, 0)), Ok(Rgb::new(0, 0, 255))]
        );
    }

    #[test]
    fn test_failures_are_reported_and_reopened() {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (ev_tx, mut ev_rx) = mpsc::channel(8);
        let written = Rc::new(RefCell::new(Vec::new()));
        let mut opens = 0;

        req_tx.send(Rgb::new(1, 2, 3)).unwrap();
        req_tx.send(Rgb::BLACK).unwrap();
        req_tx.send(Rgb::WHITE).unwrap();
        drop(req_tx);

        serve(req_rx, &ev_tx, || {
            opens += 1;
            if opens == 1 {
                anyhow::bail!("no display");
            }
            Ok(FakeSink {
                written: Rc::clone(&written),
                reject: Some("#000000"),
            })
        });

        // first open fails, the rejected write drops the sink, the last copy reopens
        assert_eq!(opens, 3);
        assert_eq!(*written.borrow(), vec!["#FFFFFF"]);
        let got = outcomes(&mut ev_rx);
        assert_eq!(got.len(), 3);
        assert!(matches!(&got[0], Err(e) if e.contains("no display")));
        assert!(matches!(&got[1], Err(e) if e.contains("selection lost")));
        assert_eq!(got[2], Ok(Rgb::WHITE));
    }
}
