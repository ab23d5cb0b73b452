//! Line-based console front end

pub mod fields;
pub mod session;

pub use session::run;

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    models::FieldError,
};

/// Prompts on `output`, answers read line by line from `input`
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `label` and read one answer without its line ending.
    ///
    /// End of input is reported as [`AppError::InputClosed`].
    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        let len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(line)
    }

    /// Prompt until `parse` accepts the answer, printing each rejection
    pub fn prompt_until<T>(
        &mut self,
        label: &str,
        mut parse: impl FnMut(&str) -> Result<T, FieldError>,
    ) -> AppResult<T> {
        loop {
            let answer = self.prompt(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
