use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Everything the quiz loop reacts to. Nothing in the quiz is timed, so there
/// is no tick: the loop blocks until the user does something.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Key(KeyEvent),
    Resize,
    /// The input side has gone away; the loop must stop.
    Closed,
}

impl QuizEvent {
    /// Maps a raw terminal event, dropping the ones the quiz ignores
    /// (key releases, mouse, focus, paste).
    pub fn from_terminal(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(QuizEvent::Key(key)),
            CtEvent::Resize(_, _) => Some(QuizEvent::Resize),
            _ => None,
        }
    }
}

pub trait QuizEventSource {
    /// Blocks until the next event. Returns [`QuizEvent::Closed`] once no more
    /// events can arrive, and keeps returning it.
    fn next_event(&self) -> QuizEvent;
}

/// Reads the terminal on a background thread and hands events over a channel
pub struct CrosstermEventSource {
    rx: Receiver<QuizEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(e) => {
                    // dropping tx turns into Closed on the loop side
                    log::error!("terminal event read failed: {e}");
                    break;
                }
            };
            if let Some(ev) = QuizEvent::from_terminal(ev) {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEventSource for CrosstermEventSource {
    fn next_event(&self) -> QuizEvent {
        self.rx.recv().unwrap_or(QuizEvent::Closed)
    }
}

/// Event source fed by hand, for headless runs and tests
pub struct ChannelEventSource {
    rx: Receiver<QuizEvent>,
}

impl ChannelEventSource {
    pub fn new() -> (Sender<QuizEvent>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self { rx })
    }

    /// A source that yields `events` in order and then reports [`QuizEvent::Closed`]
    pub fn scripted<I: IntoIterator<Item = QuizEvent>>(events: I) -> Self {
        let (tx, source) = Self::new();
        for ev in events {
            // the receiver is alive in `source`, so this cannot fail
            let _ = tx.send(ev);
        }
        source
    }
}

impl QuizEventSource for ChannelEventSource {
    fn next_event(&self) -> QuizEvent {
        self.rx.recv().unwrap_or(QuizEvent::Closed)
    }
}
