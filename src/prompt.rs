//! Interactive confirmation prompt.

use anyhow::{Context, Result};
use std::io::{stdin, stdout, BufRead, Write};

/// Ask a yes/no question and read the answer from stdin.
///
/// Reprompts on anything other than y/yes/n/no. A closed stdin counts as
/// "no", so a non-interactive run can never approve a deletion.
pub fn confirm(question: &str) -> Result<bool> {
    let mut out = stdout();
    let stdin = stdin();
    let mut handle = stdin.lock();

    loop {
        write!(out, "{question} [y/n]: ")?;
        out.flush()?;

        let mut input = String::new();
        handle
            .read_line(&mut input)
            .context("Failed to read confirmation response")?;

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            "" => {
                writeln!(out)?;
                writeln!(out, "No input received. Treating as no.")?;
                return Ok(false);
            }
            _ => {
                writeln!(out, "Invalid response. Please enter 'y' (yes) or 'n' (no).")?;
            }
        }
    }
}
