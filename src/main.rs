//! rum CLI
//!
//! Thin glue over the widget engine: parse flags, validate the
//! configuration before the terminal is touched, run exactly one
//! widget, and map its outcome to an exit code and (for `text` and
//! `choose`) a line on stdout. Widgets draw on stderr, so results can
//! be captured with ordinary command substitution.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rum::engine;
use rum::engine::state::{
    ChooseState, ConfirmState, InputState, SpinnerState, TyperState, Widget,
};
use rum::error::Error;
use rum::style;
use rum::supervisor::Supervisor;
use rum::types::{CANCEL_EXIT_CODE, Outcome};

#[derive(Parser)]
#[command(name = "rum")]
#[command(about = "Interactive terminal widgets for shell scripts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Spinner animation around a child command
    Spinner {
        /// Animation style name
        #[arg(short, long, default_value = "braille")]
        style: String,

        /// Message shown next to the spinner
        #[arg(short, long, default_value = "Waiting ...")]
        text: String,

        /// Milliseconds between animation frames
        #[arg(short = 'i', long, default_value_t = 100)]
        interval: u64,

        /// The command to run (everything after --)
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Typewriter effect: reveal a message one character at a time
    Typer {
        /// The text to type out
        #[arg(short, long)]
        text: String,

        /// Milliseconds before the first character appears
        #[arg(short, long, default_value_t = 0)]
        wait: u64,

        /// Milliseconds between characters
        #[arg(short = 'i', long, default_value_t = 100)]
        interval: u64,
    },

    /// Yes/no confirmation prompt
    Confirm {
        /// Title text
        #[arg(short, long, default_value = "Confirm?")]
        text: String,

        /// Label of the affirmative option
        #[arg(short, long, default_value = "Yes")]
        yes: String,

        /// Label of the negative option
        #[arg(short, long, default_value = "No")]
        no: String,
    },

    /// Single-line text input
    Text {
        /// Prompt shown before the input
        #[arg(short, long, default_value = "> ")]
        prompt: String,

        /// Placeholder shown while the input is empty
        #[arg(long, default_value = "Enter text here")]
        placeholder: String,

        /// Visible input width in characters
        #[arg(short, long, default_value_t = 32)]
        width: usize,
    },

    /// Choose one option. Candidates are read from stdin, one per line
    Choose {
        /// Title text
        #[arg(short, long, default_value = "Choose from these options:")]
        text: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Spinner {
            style,
            text,
            interval,
            command,
        } => cmd_spinner(style, text, interval, command),
        Commands::Typer {
            text,
            wait,
            interval,
        } => cmd_typer(text, wait, interval),
        Commands::Confirm { text, yes, no } => cmd_confirm(text, yes, no),
        Commands::Text {
            prompt,
            placeholder,
            width,
        } => cmd_text(prompt, placeholder, width),
        Commands::Choose { text } => cmd_choose(text),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rum: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_spinner(
    style: String,
    text: String,
    interval: u64,
    command: Vec<String>,
) -> Result<ExitCode, Error> {
    let frames = style::frames(&style).ok_or(Error::UnknownStyle(style))?;
    let supervisor = Supervisor::spawn(&command)?;
    let widget = Widget::Spinner(SpinnerState::new(
        text,
        frames,
        Duration::from_millis(interval),
    ));

    match engine::run(widget, Some(supervisor))? {
        Outcome::ChildExited(code) => Ok(child_exit(code)),
        _ => Ok(ExitCode::from(CANCEL_EXIT_CODE)),
    }
}

fn cmd_typer(text: String, wait: u64, interval: u64) -> Result<ExitCode, Error> {
    let widget = Widget::Typer(TyperState::new(
        &text,
        Duration::from_millis(wait),
        Duration::from_millis(interval),
    ));

    match engine::run(widget, None)? {
        Outcome::Completed => {
            // The animation ran in the alternate screen; echo the full
            // line so it survives the switch back.
            eprintln!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::from(CANCEL_EXIT_CODE)),
    }
}

fn cmd_confirm(text: String, yes: String, no: String) -> Result<ExitCode, Error> {
    let widget = Widget::Confirm(ConfirmState::new(text, yes, no));

    // Interruption counts as the negative choice, so `rum confirm || fallback`
    // behaves the same whether the user declines or hits ctrl-c.
    match engine::run(widget, None)? {
        Outcome::Confirmed(true) => Ok(ExitCode::SUCCESS),
        _ => Ok(ExitCode::FAILURE),
    }
}

fn cmd_text(prompt: String, placeholder: String, width: usize) -> Result<ExitCode, Error> {
    let widget = Widget::Input(InputState::new(prompt, placeholder, width));

    match engine::run(widget, None)? {
        Outcome::Submitted(line) => {
            if !line.is_empty() {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::from(CANCEL_EXIT_CODE)),
    }
}

fn cmd_choose(text: String) -> Result<ExitCode, Error> {
    let choices = read_choices(io::stdin().lock())?;
    let widget = Widget::Choose(ChooseState::new(text, choices)?);

    match engine::run(widget, None)? {
        Outcome::Chosen(choice) => {
            println!("{choice}");
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::from(CANCEL_EXIT_CODE)),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Candidates for `choose`: one per line, blank lines ignored.
fn read_choices(input: impl BufRead) -> Result<Vec<String>, Error> {
    let mut choices = Vec::new();
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            choices.push(line);
        }
    }
    Ok(choices)
}

/// A child's exit code, reported verbatim (codes are 0..=255 on every
/// platform this runs on).
fn child_exit(code: i32) -> ExitCode {
    ExitCode::from(exit_byte(code))
}

fn exit_byte(code: i32) -> u8 {
    (code & 0xff) as u8
}
