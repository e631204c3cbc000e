//! Prompt-until-valid console input.

use std::io::{self, BufRead, Write};

/// Message shown when the user just presses enter.
pub const DEFAULT_EMPTY_MESSAGE: &str = "Input cannot be empty.";

/// Interactive input/output pair.
///
/// Generic over the streams so sessions can be driven by scripted input in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for rendering reports between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until the trimmed, lowercased answer is one of `allowed`, and return it parsed.
    ///
    /// An answer is accepted when it is listed in `allowed` and `parse` maps it to a value.
    /// Empty answers print `empty_message`; other invalid answers list the allowed values.
    /// Bytes that are not UTF-8 count as an invalid answer. The only error is a console
    /// failure, including end of input.
    pub fn choose<T, S, F>(
        &mut self,
        prompt: &str,
        allowed: &[S],
        empty_message: &str,
        mut parse: F,
    ) -> io::Result<T>
    where
        S: AsRef<str>,
        F: FnMut(&str) -> Option<T>,
    {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            }

            let answer = String::from_utf8_lossy(&buf).trim().to_lowercase();
            if answer.is_empty() {
                writeln!(self.output, "{empty_message}")?;
                continue;
            }
            if allowed.iter().any(|a| a.as_ref() == answer) {
                if let Some(value) = parse(&answer) {
                    return Ok(value);
                }
            }

            tracing::trace!(%answer, "rejected input");
            let options: Vec<&str> = allowed.iter().map(AsRef::as_ref).collect();
            writeln!(self.output, "Please enter one of: {}.", options.join(", "))?;
        }
    }
}
