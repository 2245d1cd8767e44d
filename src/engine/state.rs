//! Widget state algebra: pure types, zero effects.
//!
//! Every widget follows the same shape: a constructor validates the
//! configuration (Init), the transition layer advances the state on
//! ticks and keys (Active), and a `Step::Done` carries the terminal
//! `Outcome`. Nothing here touches the terminal, the clock, or the
//! child process — the effects boundary feeds elapsed time and decoded
//! keys in, which keeps the whole state space testable.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;
use crate::types::Outcome;

/// Poll cadence for widgets without their own animation timer; short
/// enough that a delivered signal is noticed promptly.
pub(crate) const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Floor for animation tick intervals; keeps a zero per-character
/// delay from busy-spinning the loop.
pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Result of one pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Stay in the Active state.
    Continue,
    /// The widget reached its terminal state.
    Done(Outcome),
}

/// The five widget state machines.
#[derive(Debug)]
pub enum Widget {
    Spinner(SpinnerState),
    Typer(TyperState),
    Confirm(ConfirmState),
    Input(InputState),
    Choose(ChooseState),
}

impl Widget {
    /// Fixed scheduler interval for this widget.
    pub fn tick_interval(&self) -> Duration {
        match self {
            Widget::Spinner(spinner) => spinner.interval,
            Widget::Typer(typer) => typer.delay.max(MIN_TICK_INTERVAL),
            _ => EVENT_POLL_INTERVAL,
        }
    }
}

// ============================================================================
// SPINNER
// ============================================================================

/// Animation state for the spinner; child supervision lives with the
/// event loop, not here.
#[derive(Debug)]
pub struct SpinnerState {
    pub message: String,
    pub frames: &'static [&'static str],
    pub frame_index: usize,
    pub interval: Duration,
}

impl SpinnerState {
    pub fn new(message: String, frames: &'static [&'static str], interval: Duration) -> Self {
        SpinnerState {
            message,
            frames,
            frame_index: 0,
            interval,
        }
    }

    /// The glyph for the current frame.
    pub fn glyph(&self) -> &'static str {
        self.frames[self.frame_index % self.frames.len()]
    }
}

// ============================================================================
// TYPER
// ============================================================================

/// Typewriter reveal: nothing until `initial_wait` has elapsed, then
/// one more grapheme per `delay` period.
#[derive(Debug)]
pub struct TyperState {
    pub graphemes: Vec<String>,
    pub visible: usize,
    pub initial_wait: Duration,
    pub delay: Duration,
}

impl TyperState {
    pub fn new(text: &str, initial_wait: Duration, delay: Duration) -> Self {
        TyperState {
            graphemes: text.graphemes(true).map(str::to_owned).collect(),
            visible: 0,
            initial_wait,
            delay,
        }
    }

    /// How many graphemes should be visible after `elapsed` time.
    /// Clamped to the text length; the caller keeps `visible` monotone.
    pub fn target_visible(&self, elapsed: Duration) -> usize {
        if elapsed < self.initial_wait {
            return 0;
        }
        if self.delay.is_zero() {
            return self.graphemes.len();
        }
        let typed = (elapsed - self.initial_wait).as_millis() / self.delay.as_millis() + 1;
        usize::try_from(typed)
            .unwrap_or(usize::MAX)
            .min(self.graphemes.len())
    }

    /// The revealed prefix of the message.
    pub fn revealed(&self) -> String {
        self.graphemes[..self.visible].concat()
    }
}

// ============================================================================
// CONFIRM
// ============================================================================

/// Binary choice with a boolean cursor. The cursor starts on the
/// negative option; committing is Enter or a label's shortcut letter.
#[derive(Debug)]
pub struct ConfirmState {
    pub message: String,
    pub yes_label: String,
    pub no_label: String,
    pub affirmative: bool,
}

impl ConfirmState {
    pub fn new(message: String, yes_label: String, no_label: String) -> Self {
        ConfirmState {
            message,
            yes_label,
            no_label,
            affirmative: false,
        }
    }
}

// ============================================================================
// TEXT INPUT
// ============================================================================

/// Single-line editable buffer with a character cursor.
#[derive(Debug)]
pub struct InputState {
    pub prompt: String,
    pub placeholder: String,
    pub buffer: Vec<char>,
    pub cursor: usize,
    pub width: usize,
}

impl InputState {
    pub fn new(prompt: String, placeholder: String, width: usize) -> Self {
        InputState {
            prompt,
            placeholder,
            buffer: Vec::new(),
            cursor: 0,
            width: width.max(1),
        }
    }

    /// The committed line. An empty buffer is a valid result.
    pub fn committed(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Placeholder text truncated to the configured width, by grapheme
    /// so a multi-byte boundary is never split.
    pub fn visible_placeholder(&self) -> &str {
        let end = self
            .placeholder
            .grapheme_indices(true)
            .nth(self.width)
            .map(|(i, _)| i)
            .unwrap_or(self.placeholder.len());
        &self.placeholder[..end]
    }

    /// Visible slice of the buffer split around the cursor: at most
    /// `width` characters, always containing the cursor position.
    /// The middle element is the character under the cursor (None when
    /// the cursor sits past the end of the buffer).
    pub fn window(&self) -> (String, Option<char>, String) {
        let start = (self.cursor + 1).saturating_sub(self.width);
        let end = self.buffer.len().min(start + self.width);
        let before: String = self.buffer[start..self.cursor].iter().collect();
        let at = self.buffer.get(self.cursor).copied();
        let after: String = if self.cursor < end {
            self.buffer[self.cursor + 1..end].iter().collect()
        } else {
            String::new()
        };
        (before, at, after)
    }
}

// ============================================================================
// CHOOSE
// ============================================================================

/// Ordered candidate list with a clamped selection cursor.
#[derive(Debug)]
pub struct ChooseState {
    pub title: String,
    pub choices: Vec<String>,
    pub cursor: usize,
}

impl ChooseState {
    /// An empty candidate list is a configuration error, reported
    /// before the terminal is touched.
    pub fn new(title: String, choices: Vec<String>) -> Result<Self, Error> {
        if choices.is_empty() {
            return Err(Error::NoChoices);
        }
        Ok(ChooseState {
            title,
            choices,
            cursor: 0,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
