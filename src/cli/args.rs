//! Defines the command-line arguments and subcommands for the V# CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "vsharp",
    version,
    about = "Front-end tooling for the V# language."
)]
pub struct VsharpArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tokenize a source file and print one token kind per line.
    Tokens {
        /// The path to the V# source file to tokenize.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Run the language server over stdio.
    Lsp,
}
