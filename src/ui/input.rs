//! Keyboard input: key mapping and the polling thread that feeds the
//! controller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error};

/// The only events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Left,
    Right,
    Confirm,
    Quit,
}

impl InputEvent {
    /// Map a key press. Releases and unbound keys give `None`.
    pub fn from_key(key: &KeyEvent) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            KeyCode::Left | KeyCode::Char('h') => Some(InputEvent::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(InputEvent::Right),
            KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::Confirm),
            KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
            _ => None,
        }
    }
}

/// Poll the terminal for keys on a background thread, forwarding mapped
/// events until `quit` is set or the receiver goes away.
pub fn spawn_input_thread(
    tx: Sender<InputEvent>,
    quit: Arc<AtomicBool>,
    poll_interval: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while !quit.load(Ordering::Relaxed) {
            match event::poll(poll_interval) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    error!(%err, "polling terminal input failed");
                    let _ = tx.send(InputEvent::Quit);
                    break;
                }
            }

            let key = match event::read() {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(err) => {
                    error!(%err, "reading terminal input failed");
                    let _ = tx.send(InputEvent::Quit);
                    break;
                }
            };

            if let Some(input) = InputEvent::from_key(&key) {
                debug!(?input, "key event");
                if tx.send(input).is_err() {
                    break;
                }
            }
        }
    })
}
