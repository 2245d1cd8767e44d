//! Style constants for the widget renderer.
//!
//! Color semantics:
//! - Magenta: the active element (selected button, cursor row)
//! - Dark gray: inactive elements and the help line
//! - Dim italic: placeholder text
//! - Reversed: the text-input cursor cell

use ratatui::style::{Color, Modifier, Style};

/// Widget message / title line.
pub const STYLE_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// The active element — cursor row, spinner glyph.
pub const STYLE_ACCENT: Style = Style::new().fg(Color::Magenta);

/// Confirm button under the cursor.
pub const STYLE_BUTTON_ACTIVE: Style = Style::new().bg(Color::Magenta);

/// Confirm button not under the cursor.
pub const STYLE_BUTTON_INACTIVE: Style = Style::new().bg(Color::DarkGray);

/// Placeholder text in an empty input.
pub const STYLE_PLACEHOLDER: Style = Style::new()
    .add_modifier(Modifier::DIM)
    .add_modifier(Modifier::ITALIC);

/// The cell under the text-input cursor.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);
