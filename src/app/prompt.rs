//! Numbered-choice prompting

use std::io::{BufRead, Write};

use crate::core::error::{EmotionError, Result};

/// Printed after every rejected answer
pub const INVALID_CHOICE: &str = "Please, make a valid choice.";

/// Ask until the user types one of `valid`.
///
/// `message`, when given, is printed once before the first read. Running out
/// of input before a valid answer is a `Validation` error.
pub fn input_until_valid<R, W>(
    valid: &[usize],
    message: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    if let Some(message) = message {
        writeln!(output, "{}", message)?;
    }

    let mut line = String::new();
    loop {
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(EmotionError::validation("choice", "input ended before a valid choice"));
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if valid.contains(&choice) => return Ok(choice),
            _ => writeln!(output, "{}", INVALID_CHOICE)?,
        }
    }
}
