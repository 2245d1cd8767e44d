//! Terminal session lifecycle: raw mode, alternate screen, restoration.
//!
//! The session is a scoped guard over the one piece of shared mutable
//! state in the program — the caller's terminal mode. A process-wide
//! flag rejects a second acquisition instead of silently sharing it.
//! Restoration runs on Drop, from the panic hook, and (via the
//! interrupt flag checked by the event loop) after signal delivery, so
//! no exit path leaves the shell in raw mode.
//!
//! Widgets render to stderr: stdout carries results (`text`, `choose`)
//! and stdin may be a pipe of candidates.

use std::io::{self, IsTerminal, Stderr};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::error::Error;

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static SIGNAL_HOOKS: Once = Once::new();

/// Scoped ownership of the terminal in raw mode.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl TerminalSession {
    /// Capture the terminal: raw mode, alternate screen, hidden cursor.
    ///
    /// Fails without touching the terminal when stderr is not
    /// interactive or a session is already active.
    pub fn acquire() -> Result<Self, Error> {
        if !io::stderr().is_terminal() {
            return Err(Error::NotInteractive);
        }
        lock()?;
        install_signal_hooks();
        match enter() {
            Ok(terminal) => {
                debug!("terminal session acquired");
                Ok(TerminalSession { terminal })
            }
            Err(e) => {
                restore();
                unlock();
                Err(Error::Io(e))
            }
        }
    }

    /// Draw one frame. Renders are strictly sequential: each call
    /// completes its write before the next begins.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        unlock();
        debug!("terminal session released");
    }
}

fn lock() -> Result<(), Error> {
    SESSION_ACTIVE
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .map_err(|_| Error::TerminalBusy)?;
    Ok(())
}

fn unlock() {
    SESSION_ACTIVE.store(false, Ordering::SeqCst);
}

fn enter() -> io::Result<Terminal<CrosstermBackend<Stderr>>> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen, Hide)?;
    Terminal::new(CrosstermBackend::new(io::stderr()))
}

/// Best-effort restoration, callable from any exit path.
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stderr(), Show, LeaveAlternateScreen);
}

/// Install a panic hook that restores the terminal before the panic
/// message prints.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}

/// Consume a pending interrupt raised by signal delivery.
pub fn take_interrupt() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

extern "C" fn on_signal(_signal: libc::c_int) {
    // Only an atomic store happens here; the event loop observes the
    // flag within one poll budget and exits through the normal
    // restoration path.
    INTERRUPTED.store(true, Ordering::SeqCst);
}

fn install_signal_hooks() {
    SIGNAL_HOOKS.call_once(|| {
        let handler = on_signal as extern "C" fn(libc::c_int);
        for signal in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            // SAFETY: the handler is async-signal-safe (atomic store only).
            unsafe {
                libc::signal(signal, handler as libc::sighandler_t);
            }
        }
    });
}
