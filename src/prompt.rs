use crate::error::{PaintError, Result};
use crate::model::EXCEED_TOKEN;
use console::Term;
use std::io::{self, BufRead, IsTerminal};

/// Number of times an invalid answer is re-asked before giving up.
pub const MAX_ATTEMPTS: usize = 5;

/// A line-oriented source of answers.
pub trait LineSource {
    /// Show `prompt` and read one line. `None` means end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Show a message that expects no answer.
    fn say(&mut self, message: &str) -> io::Result<()>;
}

/// Reads from the terminal, or from stdin when it is not a terminal.
pub struct TermInput {
    term: Term,
}

impl TermInput {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TermInput {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(prompt)?;
        if self.term.is_term() && io::stdin().is_terminal() {
            return self.term.read_line().map(Some);
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            self.term.write_line("")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        self.term.write_line(message)
    }
}

/// Asks questions and validates the answers.
pub struct Prompter<S> {
    source: S,
}

impl<S: LineSource> Prompter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        Ok(self.source.say(message)?)
    }

    /// Free text, trimmed. End of input reads as blank.
    pub fn text(&mut self, prompt: &str) -> Result<String> {
        Ok(self
            .source
            .ask(prompt)?
            .map(|line| line.trim().to_string())
            .unwrap_or_default())
    }

    /// Non-blank text; blank answers are asked again.
    pub fn required(&mut self, prompt: &str, what: &str) -> Result<String> {
        for _ in 0..MAX_ATTEMPTS {
            match self.source.ask(prompt)? {
                None => break,
                Some(line) if line.trim().is_empty() => {
                    self.say(&format!("A {what} is required."))?;
                }
                Some(line) => return Ok(line.trim().to_string()),
            }
        }
        Err(PaintError::InvalidInput(format!("no {what} given")))
    }

    /// A week count. Blank means zero; anything else must be a
    /// non-negative integer or it is asked again.
    pub fn weeks(&mut self, prompt: &str) -> Result<u32> {
        for _ in 0..MAX_ATTEMPTS {
            let answer = match self.source.ask(prompt)? {
                None => return Ok(0),
                Some(line) => line.trim().to_string(),
            };
            if answer.is_empty() {
                return Ok(0);
            }
            match answer.parse::<u32>() {
                Ok(weeks) => return Ok(weeks),
                Err(_) => {
                    self.say(&format!("'{answer}' is not a whole number of weeks."))?;
                }
            }
        }
        Err(PaintError::InvalidInput("no valid week offset given".to_string()))
    }

    /// True only for the exact exceed token.
    pub fn exceed(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.text(prompt)? == EXCEED_TOKEN)
    }
}
