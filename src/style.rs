//! Named animation styles for the spinner widget.
//!
//! Frame tables are process-wide constants; a spinner advances its
//! index modulo the table length on every scheduler tick. Lookup is
//! case-sensitive and happens before the terminal is touched, so an
//! unknown name is an ordinary configuration error.

const BRAILLE: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const CIRCLE: &[&str] = &["◜", "◠", "◝", "◞", "◡", "◟"];
const LINE: &[&str] = &["|", "/", "-", "\\"];
const PULSE: &[&str] = &["█", "▓", "▒", "░"];
const POINTS: &[&str] = &["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];
const METER: &[&str] = &["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰", "▰▰▱", "▰▱▱", "▱▱▱"];
const PROGRESS: &[&str] = &[
    "[     ]", "[>    ]", "[=>   ]", "[==>  ]", "[===> ]", "[====>]", "[=====]",
];
const ARROW: &[&str] = &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"];
const VBAR: &[&str] = &[
    "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂", "▁",
];
const MOON: &[&str] = &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];
const MONKEY: &[&str] = &["🙈", "🙉", "🙊"];

/// The style registry. The capitalized `Arrow`/`VBar`/`Moon` spellings
/// are kept alongside the lowercase names for scripts written against
/// the original tool's flag values.
const STYLES: &[(&str, &[&str])] = &[
    ("braille", BRAILLE),
    ("circle", CIRCLE),
    ("line", LINE),
    ("pulse", PULSE),
    ("points", POINTS),
    ("meter", METER),
    ("progress", PROGRESS),
    ("monkey", MONKEY),
    ("arrow", ARROW),
    ("Arrow", ARROW),
    ("vbar", VBAR),
    ("VBar", VBAR),
    ("moon", MOON),
    ("Moon", MOON),
];

/// Look up the frame table for a style name (case-sensitive).
pub fn frames(name: &str) -> Option<&'static [&'static str]> {
    STYLES
        .iter()
        .find(|(style, _)| *style == name)
        .map(|(_, frames)| *frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_style_has_frames() {
        for (name, frames) in STYLES {
            assert!(!frames.is_empty(), "style '{name}' has an empty table");
        }
    }

    #[test]
    fn required_names_resolve() {
        for name in ["circle", "monkey", "meter", "Arrow", "VBar", "Moon"] {
            assert!(frames(name).is_some(), "style '{name}' missing");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(frames("braille").is_some());
        assert!(frames("Braille").is_none());
        assert!(frames("BRAILLE").is_none());
    }

    #[test]
    fn unknown_style_resolves_to_none() {
        assert!(frames("disco").is_none());
        assert!(frames("").is_none());
    }

    #[test]
    fn capitalized_aliases_share_their_table() {
        assert_eq!(frames("arrow"), frames("Arrow"));
        assert_eq!(frames("vbar"), frames("VBar"));
        assert_eq!(frames("moon"), frames("Moon"));
    }

    #[test]
    fn frame_at_tick_n_is_n_modulo_length() {
        let table = frames("circle").unwrap();
        let len = table.len();
        for tick in 0..len * 3 {
            assert_eq!(table[tick % len], table[(tick + len) % len]);
        }
    }
}
