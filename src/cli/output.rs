//! Handles user-facing output for the CLI.
//!
//! Centralizes token-dump printing and colorization so every command shares
//! one look. Errors are rendered elsewhere as miette reports.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::syntax::{Token, TokenKind};

/// Prints one token kind name per line, colorized by category when the
/// stream is a terminal.
pub fn print_tokens(tokens: &[Token]) {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    for token in tokens {
        match kind_color(token.kind) {
            Some(color) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
                println!("{}", token.kind);
                let _ = stdout.reset();
            }
            None => println!("{}", token.kind),
        }
    }
}

fn kind_color(kind: TokenKind) -> Option<Color> {
    if kind.is_keyword() {
        return Some(Color::Yellow);
    }
    if kind.is_literal() {
        return Some(Color::Green);
    }
    match kind {
        TokenKind::Comment => Some(Color::Cyan),
        TokenKind::Illegal => Some(Color::Red),
        _ => None,
    }
}
