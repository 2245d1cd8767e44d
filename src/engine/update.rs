//! Pure state transitions: (widget × key/tick) → step.
//!
//! This is the core logic of every widget. Fully testable without a
//! terminal: the effects boundary decodes keys and measures time, and
//! everything that decides what those mean lives here. Unhandled keys
//! are no-ops.

use std::time::Duration;

use crate::types::Outcome;

use super::input::Key;
use super::state::{ChooseState, ConfirmState, InputState, Step, Widget};

/// Outcome of an unconditional interrupt (ctrl-c key or delivered
/// signal). Confirm's contract folds interruption into the negative
/// choice; every other widget cancels.
pub fn interrupt(widget: &Widget) -> Outcome {
    match widget {
        Widget::Confirm(_) => Outcome::Confirmed(false),
        _ => Outcome::Cancelled,
    }
}

/// Advance the widget by one scheduler tick. `elapsed` is the time
/// since the widget entered its Active state.
pub fn tick(widget: &mut Widget, elapsed: Duration) -> Step {
    match widget {
        Widget::Spinner(spinner) => {
            spinner.frame_index = (spinner.frame_index + 1) % spinner.frames.len();
            Step::Continue
        }
        Widget::Typer(typer) => {
            // Monotone: the revealed count never decreases, even if the
            // clock misbehaves.
            typer.visible = typer.visible.max(typer.target_visible(elapsed));
            if typer.visible == typer.graphemes.len() {
                Step::Done(Outcome::Completed)
            } else {
                Step::Continue
            }
        }
        // Event-driven widgets only advance on input.
        Widget::Confirm(_) | Widget::Input(_) | Widget::Choose(_) => Step::Continue,
    }
}

/// Apply one decoded key to the widget.
pub fn handle_key(widget: &mut Widget, key: Key) -> Step {
    if key == Key::Interrupt {
        return Step::Done(interrupt(widget));
    }

    match widget {
        // The animated widgets ignore everything but interrupt.
        Widget::Spinner(_) | Widget::Typer(_) => Step::Continue,
        Widget::Confirm(confirm) => confirm_key(confirm, key),
        Widget::Input(input) => input_key(input, key),
        Widget::Choose(choose) => choose_key(choose, key),
    }
}

// ============================================================================
// PER-WIDGET HANDLERS
// ============================================================================

/// Confirm: arrows move the cursor, Enter commits it, a label's first
/// letter commits that label directly.
fn confirm_key(state: &mut ConfirmState, key: Key) -> Step {
    match key {
        Key::Right => {
            state.affirmative = true;
            Step::Continue
        }
        Key::Left => {
            state.affirmative = false;
            Step::Continue
        }
        Key::Enter => Step::Done(Outcome::Confirmed(state.affirmative)),
        Key::Char(c) => {
            // Affirmative label is matched first; with identical labels
            // the shortcut therefore commits the affirmative option.
            if matches_shortcut(&state.yes_label, c) {
                state.affirmative = true;
                Step::Done(Outcome::Confirmed(true))
            } else if matches_shortcut(&state.no_label, c) {
                state.affirmative = false;
                Step::Done(Outcome::Confirmed(false))
            } else {
                Step::Continue
            }
        }
        _ => Step::Continue,
    }
}

/// Case-insensitive match against the first character of a label.
fn matches_shortcut(label: &str, c: char) -> bool {
    label
        .chars()
        .next()
        .is_some_and(|first| first.to_lowercase().eq(c.to_lowercase()))
}

/// Text input: insert at the cursor, Backspace deletes before it,
/// arrows move it, Enter commits (empty is fine).
fn input_key(state: &mut InputState, key: Key) -> Step {
    match key {
        Key::Char(c) => {
            state.buffer.insert(state.cursor, c);
            state.cursor += 1;
            Step::Continue
        }
        Key::Backspace => {
            if state.cursor > 0 {
                state.cursor -= 1;
                state.buffer.remove(state.cursor);
            }
            Step::Continue
        }
        Key::Left => {
            state.cursor = state.cursor.saturating_sub(1);
            Step::Continue
        }
        Key::Right => {
            state.cursor = (state.cursor + 1).min(state.buffer.len());
            Step::Continue
        }
        Key::Enter => Step::Done(Outcome::Submitted(state.committed())),
        _ => Step::Continue,
    }
}

/// Choose: the cursor clamps at both ends (no wraparound), Enter
/// commits the candidate under it.
fn choose_key(state: &mut ChooseState, key: Key) -> Step {
    match key {
        Key::Up => {
            state.cursor = state.cursor.saturating_sub(1);
            Step::Continue
        }
        Key::Down => {
            state.cursor = (state.cursor + 1).min(state.choices.len() - 1);
            Step::Continue
        }
        Key::Enter => Step::Done(Outcome::Chosen(state.choices[state.cursor].clone())),
        _ => Step::Continue,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::{SpinnerState, TyperState};

    fn spinner() -> Widget {
        let frames: &[&str] = &["a", "b", "c"];
        Widget::Spinner(SpinnerState::new(
            "working".into(),
            frames,
            Duration::from_millis(100),
        ))
    }

    fn confirm(yes: &str, no: &str) -> Widget {
        Widget::Confirm(ConfirmState::new("Sure?".into(), yes.into(), no.into()))
    }

    fn text_input() -> Widget {
        Widget::Input(InputState::new("> ".into(), "".into(), 32))
    }

    fn choose(items: &[&str]) -> Widget {
        let choices = items.iter().map(|s| (*s).to_owned()).collect();
        Widget::Choose(ChooseState::new("Pick:".into(), choices).unwrap())
    }

    fn press(widget: &mut Widget, keys: &[Key]) -> Option<Outcome> {
        for key in keys {
            if let Step::Done(outcome) = handle_key(widget, *key) {
                return Some(outcome);
            }
        }
        None
    }

    // -- Spinner --

    #[test]
    fn spinner_frame_index_is_tick_count_modulo_length() {
        let mut widget = spinner();
        for n in 1..=7 {
            assert_eq!(tick(&mut widget, Duration::ZERO), Step::Continue);
            let Widget::Spinner(s) = &widget else { unreachable!() };
            assert_eq!(s.frame_index, n % 3);
        }
    }

    #[test]
    fn spinner_ignores_ordinary_keys() {
        let mut widget = spinner();
        assert_eq!(handle_key(&mut widget, Key::Enter), Step::Continue);
        assert_eq!(handle_key(&mut widget, Key::Char('q')), Step::Continue);
    }

    #[test]
    fn spinner_interrupt_cancels() {
        let mut widget = spinner();
        assert_eq!(
            handle_key(&mut widget, Key::Interrupt),
            Step::Done(Outcome::Cancelled)
        );
    }

    // -- Typer --

    #[test]
    fn typer_reveal_is_monotone_and_completes() {
        let mut widget = Widget::Typer(TyperState::new(
            "hey",
            Duration::from_millis(100),
            Duration::from_millis(50),
        ));
        assert_eq!(tick(&mut widget, Duration::from_millis(50)), Step::Continue);
        let Widget::Typer(t) = &widget else { unreachable!() };
        assert_eq!(t.visible, 0);

        assert_eq!(tick(&mut widget, Duration::from_millis(110)), Step::Continue);
        let Widget::Typer(t) = &widget else { unreachable!() };
        assert_eq!(t.visible, 1);

        // A stale elapsed value never rolls the reveal back.
        assert_eq!(tick(&mut widget, Duration::from_millis(90)), Step::Continue);
        let Widget::Typer(t) = &widget else { unreachable!() };
        assert_eq!(t.visible, 1);

        assert_eq!(
            tick(&mut widget, Duration::from_millis(250)),
            Step::Done(Outcome::Completed)
        );
        let Widget::Typer(t) = &widget else { unreachable!() };
        assert_eq!(t.revealed(), "hey");
    }

    #[test]
    fn typer_with_empty_text_completes_on_first_tick() {
        let mut widget = Widget::Typer(TyperState::new(
            "",
            Duration::from_millis(100),
            Duration::from_millis(50),
        ));
        assert_eq!(
            tick(&mut widget, Duration::ZERO),
            Step::Done(Outcome::Completed)
        );
    }

    // -- Confirm --

    #[test]
    fn confirm_arrows_then_enter_commit_the_cursor() {
        let mut widget = confirm("Yes", "No");
        assert_eq!(handle_key(&mut widget, Key::Right), Step::Continue);
        assert_eq!(
            handle_key(&mut widget, Key::Enter),
            Step::Done(Outcome::Confirmed(true))
        );

        let mut widget = confirm("Yes", "No");
        assert_eq!(handle_key(&mut widget, Key::Right), Step::Continue);
        assert_eq!(handle_key(&mut widget, Key::Left), Step::Continue);
        assert_eq!(
            handle_key(&mut widget, Key::Enter),
            Step::Done(Outcome::Confirmed(false))
        );
    }

    #[test]
    fn confirm_enter_with_untouched_cursor_is_negative() {
        let mut widget = confirm("Yes", "No");
        assert_eq!(
            handle_key(&mut widget, Key::Enter),
            Step::Done(Outcome::Confirmed(false))
        );
    }

    #[test]
    fn confirm_shortcut_letter_equals_navigate_plus_enter() {
        for key in [Key::Char('y'), Key::Char('Y')] {
            let mut widget = confirm("Yes", "No");
            assert_eq!(
                handle_key(&mut widget, key),
                Step::Done(Outcome::Confirmed(true))
            );
        }
        for key in [Key::Char('n'), Key::Char('N')] {
            let mut widget = confirm("Yes", "No");
            assert_eq!(
                handle_key(&mut widget, key),
                Step::Done(Outcome::Confirmed(false))
            );
        }
    }

    #[test]
    fn confirm_shortcuts_follow_custom_labels() {
        let mut widget = confirm("Overwrite", "Keep");
        assert_eq!(
            handle_key(&mut widget, Key::Char('o')),
            Step::Done(Outcome::Confirmed(true))
        );
        let mut widget = confirm("Overwrite", "Keep");
        assert_eq!(
            handle_key(&mut widget, Key::Char('k')),
            Step::Done(Outcome::Confirmed(false))
        );
        // Only the first letter is a shortcut.
        let mut widget = confirm("Overwrite", "Keep");
        assert_eq!(handle_key(&mut widget, Key::Char('v')), Step::Continue);
    }

    #[test]
    fn confirm_identical_labels_still_commit() {
        let mut widget = confirm("Ok", "Ok");
        assert_eq!(
            handle_key(&mut widget, Key::Char('o')),
            Step::Done(Outcome::Confirmed(true))
        );
    }

    #[test]
    fn confirm_interrupt_is_the_negative_choice() {
        let mut widget = confirm("Yes", "No");
        assert_eq!(
            handle_key(&mut widget, Key::Interrupt),
            Step::Done(Outcome::Confirmed(false))
        );
    }

    // -- Text input --

    #[test]
    fn input_typed_text_round_trips() {
        let mut widget = text_input();
        let outcome = press(
            &mut widget,
            &[Key::Char('h'), Key::Char('i'), Key::Enter],
        );
        assert_eq!(outcome, Some(Outcome::Submitted("hi".into())));
    }

    #[test]
    fn input_backspace_deletes_before_the_cursor() {
        // "abc", two backspaces, "x" → "ax"
        let mut widget = text_input();
        let outcome = press(
            &mut widget,
            &[
                Key::Char('a'),
                Key::Char('b'),
                Key::Char('c'),
                Key::Backspace,
                Key::Backspace,
                Key::Char('x'),
                Key::Enter,
            ],
        );
        assert_eq!(outcome, Some(Outcome::Submitted("ax".into())));
    }

    #[test]
    fn input_cursor_movement_edits_mid_buffer() {
        let mut widget = text_input();
        let outcome = press(
            &mut widget,
            &[
                Key::Char('a'),
                Key::Char('c'),
                Key::Left,
                Key::Char('b'),
                Key::Enter,
            ],
        );
        assert_eq!(outcome, Some(Outcome::Submitted("abc".into())));
    }

    #[test]
    fn input_cursor_clamps_at_both_ends() {
        let mut widget = text_input();
        // Left on an empty buffer, backspace at position 0: no-ops.
        assert_eq!(handle_key(&mut widget, Key::Left), Step::Continue);
        assert_eq!(handle_key(&mut widget, Key::Backspace), Step::Continue);
        let outcome = press(
            &mut widget,
            &[Key::Char('a'), Key::Right, Key::Right, Key::Char('b'), Key::Enter],
        );
        assert_eq!(outcome, Some(Outcome::Submitted("ab".into())));
    }

    #[test]
    fn input_empty_commit_is_a_valid_result() {
        let mut widget = text_input();
        assert_eq!(
            handle_key(&mut widget, Key::Enter),
            Step::Done(Outcome::Submitted(String::new()))
        );
    }

    #[test]
    fn input_interrupt_aborts_without_output() {
        let mut widget = text_input();
        handle_key(&mut widget, Key::Char('a'));
        assert_eq!(
            handle_key(&mut widget, Key::Interrupt),
            Step::Done(Outcome::Cancelled)
        );
    }

    // -- Choose --

    #[test]
    fn choose_commits_the_candidate_under_the_cursor() {
        let mut widget = choose(&["Easy", "Medium", "Hard"]);
        let outcome = press(&mut widget, &[Key::Down, Key::Enter]);
        assert_eq!(outcome, Some(Outcome::Chosen("Medium".into())));
    }

    #[test]
    fn choose_cursor_clamps_instead_of_wrapping() {
        let mut widget = choose(&["a", "b", "c"]);
        // Up at the top stays at the top.
        handle_key(&mut widget, Key::Up);
        let Widget::Choose(c) = &widget else { unreachable!() };
        assert_eq!(c.cursor, 0);
        // Down past the end stays at the end.
        for _ in 0..10 {
            handle_key(&mut widget, Key::Down);
        }
        let Widget::Choose(c) = &widget else { unreachable!() };
        assert_eq!(c.cursor, 2);
    }

    #[test]
    fn choose_result_is_always_a_member_of_the_list() {
        let items = ["one", "two", "three"];
        for moves in 0..5 {
            let mut widget = choose(&items);
            for _ in 0..moves {
                handle_key(&mut widget, Key::Down);
            }
            let Step::Done(Outcome::Chosen(choice)) = handle_key(&mut widget, Key::Enter) else {
                panic!("enter must commit");
            };
            assert!(items.contains(&choice.as_str()));
        }
    }

    #[test]
    fn choose_interrupt_cancels_without_a_choice() {
        let mut widget = choose(&["a", "b"]);
        assert_eq!(
            handle_key(&mut widget, Key::Interrupt),
            Step::Done(Outcome::Cancelled)
        );
    }

    #[test]
    fn single_candidate_list_commits_immediately_on_enter() {
        let mut widget = choose(&["only"]);
        assert_eq!(
            handle_key(&mut widget, Key::Enter),
            Step::Done(Outcome::Chosen("only".into()))
        );
    }
}
