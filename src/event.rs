use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use folio_contact::logger::log_to_file;
use folio_contact::SubmissionOutcome;
use futures::{FutureExt, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event
    Key(KeyEvent),
    /// Pasted text
    Paste(String),
    /// Periodic tick for UI refresh and notification expiry
    Tick,
    /// A submission task finished
    SubmissionResolved(SubmissionOutcome),
}

/// Event handler for the TUI application
pub struct EventHandler {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Get a clone of the sender for other components
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.sender.clone()
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.receiver.recv().await
    }

    /// Spawn the keyboard event listener task
    pub fn spawn_keyboard_listener(&self) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            loop {
                let event = reader.next().fuse();
                tokio::select! {
                    maybe_event = event => {
                        match maybe_event {
                            Some(Ok(CrosstermEvent::Key(key))) => {
                                // Filter out key release events (Windows sends both press and release)
                                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                                    if sender.send(AppEvent::Key(key)).is_err() {
                                        break; // Channel closed, stop listener
                                    }
                                }
                            }
                            Some(Ok(CrosstermEvent::Paste(text))) => {
                                if sender.send(AppEvent::Paste(text)).is_err() {
                                    break;
                                }
                            }
                            Some(Ok(_)) => {
                                // Ignore mouse, resize, focus
                            }
                            Some(Err(e)) => {
                                log_to_file(&format!("Keyboard event error: {}", e));
                            }
                            None => break,
                        }
                    }
                }
            }
        });
    }

    /// Spawn the tick timer task for periodic UI refresh
    pub fn spawn_tick_timer(&self, tick_rate: Duration) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                interval.tick().await;
                if sender.send(AppEvent::Tick).is_err() {
                    break; // Channel closed, stop timer
                }
            }
        });
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
