//! Shared domain types.

/// Exit code reported when a widget is interrupted (128 + SIGINT, the
/// shell convention). `confirm` is the exception: its contract folds
/// interruption into the negative choice, exit 1.
pub const CANCEL_EXIT_CODE: u8 = 130;

/// Terminal value of a widget run.
///
/// Produced by the engine once a widget reaches its terminal state;
/// the CLI glue maps it to an exit code and, where applicable, a line
/// on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Spinner: the supervised child exited with this code.
    ChildExited(i32),
    /// Typer: every character was revealed.
    Completed,
    /// Confirm: the committed choice (true = affirmative).
    Confirmed(bool),
    /// Text input: the committed line. May be empty — that is a valid
    /// result, not an error.
    Submitted(String),
    /// Choose: the committed candidate.
    Chosen(String),
    /// The widget was interrupted before reaching a result.
    Cancelled,
}
