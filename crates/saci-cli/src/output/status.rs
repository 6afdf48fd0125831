//! Colored status lines

use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    fn prefix(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Print `[PREFIX]: message`, errors to stderr and the rest to stdout
pub fn message(severity: Severity, msg: &str) {
    let mut stream = match severity {
        Severity::Error => StandardStream::stderr(choice(std::io::stderr().is_terminal())),
        _ => StandardStream::stdout(choice(std::io::stdout().is_terminal())),
    };

    let _ = stream.set_color(ColorSpec::new().set_fg(Some(severity.color())).set_bold(true));
    let _ = write!(stream, "[{}]", severity.prefix());
    let _ = stream.reset();
    let _ = writeln!(stream, ": {}", msg);
}

fn choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

pub fn info(msg: &str) {
    message(Severity::Info, msg);
}

pub fn success(msg: &str) {
    message(Severity::Success, msg);
}

pub fn warn(msg: &str) {
    message(Severity::Warning, msg);
}

pub fn error(msg: &str) {
    message(Severity::Error, msg);
}
