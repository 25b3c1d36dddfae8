//! Line-oriented prompt helpers. Every prompt loops until the input passes
//! validation; only a closed or failing input stream is an error.

use std::io::{BufRead, Write};

use anyhow::{ensure, Context, Result};
use thiserror::Error;

use rental_store::record::RentalDate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Invalid input! Name must contain only letters and spaces.")]
    Name,
    #[error("Invalid date format! Please use YYYY-MM-DD.")]
    Date,
}

/// Reads one line, stripping the trailing newline. Errors when the stream is
/// closed, which ends the session rather than spinning on empty reads.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = String::new();
    let read = input.read_line(&mut buf).context("Failed input read")?;
    ensure!(read != 0, "input stream closed");
    Ok(buf.trim_end_matches(&['\r', '\n'][..]).to_string())
}

pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    read_line(input)
}

pub fn validate_name(name: &str) -> Result<(), InvalidInput> {
    let alphabetic = name.chars().all(|c| c.is_alphabetic() || c == ' ');
    if name.is_empty() || !alphabetic {
        return Err(InvalidInput::Name);
    }
    Ok(())
}

pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        let line = prompt_line(input, output, "Enter Renter Name (letters and spaces only): ")?;
        match validate_name(&line) {
            Ok(()) => return Ok(line),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

pub fn prompt_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<RentalDate> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.parse::<RentalDate>() {
            Ok(date) => return Ok(date),
            Err(_) => writeln!(output, "{}", InvalidInput::Date)?,
        }
    }
}

pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.trim() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => writeln!(output, "Please enter 'yes' or 'no'.")?,
        }
    }
}

/// Numbered selection, 1 through `max` inclusive.
pub fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    max: usize,
) -> Result<usize> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
            _ => writeln!(output, "Invalid choice!")?,
        }
    }
}
