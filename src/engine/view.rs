//! Pure rendering: map widget state to ratatui widget trees.
//!
//! Each widget has a dedicated render function; `render()` dispatches
//! on the variant. The functions are pure (state in, widgets out); the
//! only effect is `Frame::render_widget` writing to the terminal
//! buffer, which the backend diffs against the previous frame so each
//! redraw overwrites in place.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{ChooseState, ConfirmState, InputState, SpinnerState, TyperState, Widget};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the widget's current state to the terminal frame.
pub fn render(widget: &Widget, frame: &mut Frame) {
    let area = frame.area();

    // Content on top, one help line at the bottom.
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
    frame.render_widget(render_help(widget), chunks[1]);

    match widget {
        Widget::Spinner(state) => render_spinner(state, frame, chunks[0]),
        Widget::Typer(state) => render_typer(state, frame, chunks[0]),
        Widget::Confirm(state) => render_confirm(state, frame, chunks[0]),
        Widget::Input(state) => render_input(state, frame, chunks[0]),
        Widget::Choose(state) => render_choose(state, frame, chunks[0]),
    }
}

/// Help line showing the keys the current widget understands.
fn render_help(widget: &Widget) -> Paragraph<'static> {
    let help_text = match widget {
        Widget::Spinner(_) | Widget::Typer(_) => "^C cancel",
        Widget::Confirm(_) => "[←/→] select  [Enter] confirm",
        Widget::Input(_) => "[←/→] move  [Enter] submit",
        Widget::Choose(_) => "[↑/↓] move  [Enter] select",
    };
    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// WIDGETS
// ============================================================================

fn render_spinner(state: &SpinnerState, frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(state.glyph(), theme::STYLE_ACCENT),
            Span::raw("  "),
            Span::raw(state.message.as_str()),
        ]),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_typer(state: &TyperState, frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(format!("  {}", state.revealed())),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_confirm(state: &ConfirmState, frame: &mut Frame, area: Rect) {
    let no = format!(" {: ^10} ", state.no_label);
    let yes = format!(" {: ^10} ", state.yes_label);
    let (no_style, yes_style) = if state.affirmative {
        (theme::STYLE_BUTTON_INACTIVE, theme::STYLE_BUTTON_ACTIVE)
    } else {
        (theme::STYLE_BUTTON_ACTIVE, theme::STYLE_BUTTON_INACTIVE)
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", state.message),
            theme::STYLE_TITLE,
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(no, no_style),
            Span::raw("  "),
            Span::styled(yes, yes_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_input(state: &InputState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw("  "), Span::raw(state.prompt.as_str())];

    let (before, at, after) = state.window();
    spans.push(Span::raw(before));
    match at {
        Some(c) => spans.push(Span::styled(c.to_string(), theme::STYLE_CURSOR)),
        None => spans.push(Span::styled(" ", theme::STYLE_CURSOR)),
    }
    spans.push(Span::raw(after));

    if state.buffer.is_empty() {
        spans.push(Span::styled(
            state.visible_placeholder(),
            theme::STYLE_PLACEHOLDER,
        ));
    }

    let text = vec![Line::from(""), Line::from(spans)];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_choose(state: &ChooseState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", state.title),
            theme::STYLE_TITLE,
        )),
        Line::from(""),
    ];

    // Derive the visible window from the viewport height so the cursor
    // row never scrolls out of sight.
    let visible_rows = (area.height as usize).saturating_sub(lines.len()).max(1);
    let skip = state.cursor.saturating_sub(visible_rows - 1);

    for (index, choice) in state
        .choices
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible_rows)
    {
        if index == state.cursor {
            lines.push(Line::from(vec![
                Span::styled("  ❯ ", theme::STYLE_ACCENT),
                Span::styled(choice.as_str(), theme::STYLE_ACCENT),
            ]));
        } else {
            lines.push(Line::from(format!("    {choice}")));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::ChooseState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 12);
        Terminal::new(backend).unwrap()
    }

    fn all_widgets() -> Vec<Widget> {
        let frames: &[&str] = &["|", "/", "-", "\\"];
        let mut typer = TyperState::new(
            "hello there",
            Duration::ZERO,
            Duration::from_millis(50),
        );
        typer.visible = 5;
        let mut input = InputState::new("> ".into(), "Enter text here".into(), 32);
        input.buffer = "partial".chars().collect();
        input.cursor = 3;
        vec![
            Widget::Spinner(SpinnerState::new(
                "Waiting ...".into(),
                frames,
                Duration::from_millis(100),
            )),
            Widget::Typer(typer),
            Widget::Confirm(ConfirmState::new("Sure?".into(), "Yes".into(), "No".into())),
            Widget::Input(input),
            Widget::Choose(
                ChooseState::new(
                    "Pick one:".into(),
                    vec!["Easy".into(), "Medium".into(), "Hard".into()],
                )
                .unwrap(),
            ),
        ]
    }

    #[test]
    fn every_widget_renders_without_panic() {
        let mut terminal = make_terminal();
        for widget in all_widgets() {
            terminal
                .draw(|frame| render(&widget, frame))
                .expect("every widget should render");
        }
    }

    #[test]
    fn widgets_survive_a_tiny_viewport() {
        let backend = TestBackend::new(4, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        for widget in all_widgets() {
            terminal
                .draw(|frame| render(&widget, frame))
                .expect("rendering must not depend on viewport size");
        }
    }

    #[test]
    fn choose_keeps_a_deep_cursor_renderable() {
        let choices: Vec<String> = (0..100).map(|i| format!("item {i}")).collect();
        let mut state = ChooseState::new("Pick:".into(), choices).unwrap();
        state.cursor = 99;
        let widget = Widget::Choose(state);
        let mut terminal = make_terminal();
        terminal
            .draw(|frame| render(&widget, frame))
            .expect("cursor far past the viewport should render");
    }

    #[test]
    fn help_line_exists_for_each_widget() {
        for widget in all_widgets() {
            let _ = render_help(&widget);
        }
    }
}
