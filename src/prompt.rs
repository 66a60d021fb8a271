//! Blocking numeric prompt
//!
//! Asks a question, reads one line, and repeats until the line parses as an
//! `f64`. There is no retry limit. Only end of input or an I/O failure ends
//! the loop early.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::{EngineCalcError, Result};

/// Diagnostic printed after a line that does not parse as a number.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number.";

/// Line-oriented prompt over any reader/writer pair.
///
/// The binary wraps locked stdin/stdout; tests pass byte slices and `Vec<u8>`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: Vec::new(),
        }
    }

    /// Ask `question` until the answer parses as a number.
    ///
    /// The question is written without a trailing newline and flushed so it
    /// shows before the read blocks. Each rejected answer prints
    /// [`INVALID_NUMBER_MESSAGE`] on its own line and asks the same question
    /// again.
    pub fn prompt_f64(&mut self, question: &str) -> Result<f64> {
        loop {
            write!(self.writer, "{}", question)?;
            self.writer.flush()?;

            // Raw bytes so an undecodable line is retried like any other bad answer
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Err(EngineCalcError::end_of_input(question));
            }
            let answer = String::from_utf8_lossy(&self.line);

            match parse_number(&answer) {
                Some(value) => {
                    trace!(question, value, "accepted answer");
                    return Ok(value);
                }
                None => {
                    debug!(question, input = %answer.trim(), "rejected non-numeric answer");
                    writeln!(self.writer, "{}", INVALID_NUMBER_MESSAGE)?;
                }
            }
        }
    }

    /// Mutable access to the output side, for writing the report after the
    /// prompts are done.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Parse one answer line.
///
/// Surrounding whitespace (including the line terminator) is ignored. Accepts
/// whatever `f64::from_str` accepts (signs, exponents, `inf`, `infinity` and
/// `nan` in any case) plus single underscores between digits, as in `1_000`.
pub fn parse_number(line: &str) -> Option<f64> {
    let text = line.trim();
    if !text.contains('_') {
        return text.parse::<f64>().ok();
    }

    let bytes = text.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !grouped {
        return None;
    }
    text.replace('_', "").parse::<f64>().ok()
}
