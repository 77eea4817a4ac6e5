//! Console commands.
//!
//! `ingest` mirrors the classic console workflow: one line of
//! space-separated tokens, each converted to the element type and spliced
//! in at the cursor. `render` takes the tokens as arguments instead, which
//! is handier for scripting.

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use corelib::{ingest_tokens, FromToken, IngestReport, Ring};
use std::fmt::Display;
use std::io::{self, BufRead};

/// Result alias for command execution.
pub type CommandResult = anyhow::Result<()>;

/// Element type of the ring being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ElementKind {
    /// 64-bit signed integers.
    Int,
    /// 64-bit floats.
    Float,
    /// Raw text tokens.
    Text,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read one line of space-separated tokens from stdin and load them.
    Ingest {
        /// Element type to convert tokens into.
        #[arg(long, value_enum, default_value = "int")]
        element: ElementKind,
    },
    /// Load tokens given as arguments and print the resulting ring.
    Render {
        /// Element type to convert tokens into.
        #[arg(long, value_enum, default_value = "int")]
        element: ElementKind,
        /// Cursor steps to take after loading (negative steps backward).
        #[arg(long, default_value_t = 0)]
        steps: i32,
        /// Tokens to load, in input order.
        tokens: Vec<String>,
    },
}

impl Command {
    pub fn execute(self) -> CommandResult {
        match self {
            Command::Ingest { element } => {
                let line = read_input_line()?;
                let tokens: Vec<&str> = line.split(' ').collect();
                dispatch(element, &tokens, 0)
            }
            Command::Render {
                element,
                steps,
                tokens,
            } => {
                let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
                dispatch(element, &tokens, steps)
            }
        }
    }
}

fn read_input_line() -> anyhow::Result<String> {
    println!("Enter new elements separated by spaces:");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn dispatch(element: ElementKind, tokens: &[&str], steps: i32) -> CommandResult {
    match element {
        ElementKind::Int => drive::<i64>(tokens, steps),
        ElementKind::Float => drive::<f64>(tokens, steps),
        ElementKind::Text => drive::<String>(tokens, steps),
    }
}

fn drive<T>(tokens: &[&str], steps: i32) -> CommandResult
where
    T: FromToken + Display,
{
    let mut ring: Ring<T> = Ring::new();
    let report = ingest_tokens(&mut ring, tokens.iter().copied())?;
    for _ in 0..steps.unsigned_abs() {
        if ring.is_empty() {
            break;
        }
        if steps >= 0 {
            ring.step_forward()?;
        } else {
            ring.step_backward()?;
        }
    }
    print_summary(&ring, &report);
    Ok(())
}

fn print_summary<T: Display>(ring: &Ring<T>, report: &IngestReport) {
    println!("ring:    {ring}");
    println!("length:  {}", ring.len());
    if let Ok(current) = ring.read() {
        println!("cursor:  {current}");
    }
    if !report.skipped.is_empty() {
        println!("skipped: {} token(s)", report.skipped.len());
    }
}
