//! The V# command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

pub mod args;
pub mod output;

use std::path::Path;
use std::{fs, process};

use clap::Parser;

use crate::cli::args::{Command, VsharpArgs};
use crate::errors::{io_error, print_error, SourceContext, VsharpError};
use crate::lsp;
use crate::syntax::{keywords, lexer};

/// The main entry point for the CLI.
pub fn run() {
    let args = VsharpArgs::parse();

    let result = match args.command {
        Command::Tokens { file } => handle_tokens(&file),
        Command::Lsp => handle_lsp(),
    };

    if let Err(e) = result {
        print_error(e);
        process::exit(1);
    }
}

/// Handles the `tokens` subcommand.
fn handle_tokens(path: &Path) -> Result<(), VsharpError> {
    let name = path.display().to_string();
    let source = fs::read_to_string(path)
        .map_err(|e| io_error(format!("cannot read {}: {}", name, e)))?;
    let context = SourceContext::from_file(name, source.clone());
    let tokens = lexer::tokenize(&source, &context)?;
    output::print_tokens(&tokens);
    Ok(())
}

/// Handles the `lsp` subcommand.
fn handle_lsp() -> Result<(), VsharpError> {
    lsp::run_stdio(keywords::KEYWORDS)
        .map_err(|e| io_error(format!("language server failed: {}", e)))
}
