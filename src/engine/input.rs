//! Keyboard input: bounded polling and key decoding.
//!
//! `poll_key` never blocks longer than its timeout; everything the
//! widgets don't understand (mouse, resize, key releases, unmapped
//! codes) is discarded here rather than surfaced as an error.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Semantic key event, decoupled from crossterm's raw representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    /// Ctrl-C. Always decoded, regardless of widget state; every
    /// widget treats it as an unconditional cancellation signal.
    Interrupt,
}

/// Map a crossterm key event to a semantic key.
///
/// Returns None for key releases and codes no widget consumes.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Key::Interrupt);
    }

    match key.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

/// Wait up to `timeout` for the next decodable key.
///
/// Non-key events consume from the budget but are skipped, so a burst
/// of resize events cannot masquerade as input.
pub fn poll_key(timeout: Duration) -> io::Result<Option<Key>> {
    let deadline = Instant::now() + timeout;
    loop {
        let budget = deadline.saturating_duration_since(Instant::now());
        if !event::poll(budget)? {
            return Ok(None);
        }
        if let Event::Key(key) = event::read()? {
            if let Some(decoded) = map_key(key) {
                return Ok(Some(decoded));
            }
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
    }
}
