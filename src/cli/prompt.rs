use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::core::Prompt;

/// Terminal prompt implementation reading answers from stdin.
///
/// `--yes` and `--value` pre-answer the questions so scripted callers
/// never block on input; an end-of-file on stdin counts as declining.
pub struct CliPrompt {
    assume_yes: bool,
    preset_value: Option<String>,
}

impl CliPrompt {
    pub fn new(assume_yes: bool, preset_value: Option<String>) -> Self {
        Self {
            assume_yes,
            preset_value,
        }
    }

    fn read_line() -> Result<Option<String>> {
        io::stderr().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl Prompt for CliPrompt {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        eprint!("{} [y/N] ", message);
        let Some(answer) = Self::read_line()? else {
            return Ok(false);
        };
        let answer = answer.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    fn input(&mut self, message: &str, initial: Option<&str>) -> Result<Option<String>> {
        if let Some(value) = self.preset_value.take() {
            return Ok(Some(value));
        }
        if self.assume_yes {
            return Ok(initial.map(str::to_string));
        }
        match initial {
            Some(initial) => eprint!("{} [{}]: ", message, initial),
            None => eprint!("{}: ", message),
        }
        let Some(answer) = Self::read_line()? else {
            return Ok(None);
        };
        if answer.is_empty() {
            // an empty line accepts the pre-filled value when there is one
            return Ok(initial.map(str::to_string));
        }
        Ok(Some(answer))
    }
}
