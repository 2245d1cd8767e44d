//! The effects boundary: one cooperative render/input loop per widget.
//!
//! Each iteration blocks only on a bounded poll — either the next tick
//! is due or input arrives within the remaining tick budget, whichever
//! comes first. The child-process poll is non-blocking and folded into
//! the same iteration, so the animation never stalls on the child.
//!
//! Interrupt (ctrl-c key or delivered signal) is checked first and
//! wins over any pending tick or input; every path out of the loop
//! releases the terminal session last, after the child (if any) has
//! been dealt with.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::Error;
use crate::supervisor::Supervisor;
use crate::types::Outcome;

use super::input;
use super::state::{Step, Widget};
use super::terminal::{self, TerminalSession};
use super::update;
use super::view;

/// Drive one widget to completion.
///
/// `child` carries the spinner's supervised process; it is terminated
/// on every outcome that is not its own exit, so cancellation and
/// errors never orphan it.
pub fn run(widget: Widget, mut child: Option<Supervisor>) -> Result<Outcome, Error> {
    terminal::install_panic_hook();
    let mut session = TerminalSession::acquire()?;

    let result = event_loop(&mut session, widget, &mut child);

    if let Some(supervisor) = child.as_mut() {
        if !matches!(result, Ok(Outcome::ChildExited(_))) {
            let _ = supervisor.terminate();
        }
    }
    drop(session);

    if let Ok(outcome) = &result {
        debug!(?outcome, "widget finished");
    }
    result
}

fn event_loop(
    session: &mut TerminalSession,
    mut widget: Widget,
    child: &mut Option<Supervisor>,
) -> Result<Outcome, Error> {
    let started = Instant::now();
    let interval = widget.tick_interval();
    let mut next_tick = started + interval;

    session.draw(|frame| view::render(&widget, frame))?;

    loop {
        // A delivered signal wins over any pending tick or input and
        // funnels into the same cancellation path as a ctrl-c key.
        if terminal::take_interrupt() {
            return Ok(update::interrupt(&widget));
        }

        if let Some(supervisor) = child.as_mut() {
            if let Some(code) = supervisor.poll()? {
                return Ok(Outcome::ChildExited(code));
            }
        }

        if Instant::now() >= next_tick {
            next_tick += interval;
            if let Step::Done(outcome) = update::tick(&mut widget, started.elapsed()) {
                return Ok(outcome);
            }
        }

        session.draw(|frame| view::render(&widget, frame))?;

        // Input gets whatever budget remains until the next tick, then
        // queued keys are drained up to one committing event before
        // the next render.
        let budget = next_tick.saturating_duration_since(Instant::now());
        let mut key = input::poll_key(budget)?;
        while let Some(decoded) = key {
            if let Step::Done(outcome) = update::handle_key(&mut widget, decoded) {
                return Ok(outcome);
            }
            key = input::poll_key(Duration::ZERO)?;
        }
    }
}
