use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Redraw cadence of the timer screen.
pub const FRAME_RATE: Duration = Duration::from_millis(33);

/// Events consumed by the timer screen loop.
pub enum AppEvent {
    /// A key press (repeats and releases are filtered out).
    Key(KeyEvent),
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
    /// No input within one frame; time to check the countdown and redraw.
    Frame,
}

/// Polls crossterm on a background thread and forwards events over a
/// channel, emitting `Frame` whenever a frame passes without input.
///
/// The countdown itself never runs here; the screen loop owns the ticker.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _handle: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(frame_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            let next = if event::poll(frame_rate).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(AppEvent::Key(key))
                    }
                    Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                    _ => None,
                }
            } else {
                Some(AppEvent::Frame)
            };

            if let Some(evt) = next {
                // Receiver gone means the screen has closed.
                if tx.send(evt).is_err() {
                    return;
                }
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Block until the next event arrives.
    pub fn next(&self) -> Result<AppEvent, mpsc::RecvError> {
        self.rx.recv()
    }
}
