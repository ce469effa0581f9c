//! Terminal collaborators used by every game.
//!
//! - `Messages`: key → display text
//! - `LinePrompter`: blocking line input and output
//! - `ScreenClearer`: cosmetic screen clearing
//!
//! `Console` bundles the three so game code can say "show message X,
//! then ask until the answer parses" in one call.
//!
//! ## Example
//!
//! ```
//! use parlor::console::{Console, IoPrompter, Messages};
//!
//! let messages: Messages = [("ask", "Pick a number"), ("retry", "Try again")]
//!     .into_iter()
//!     .collect();
//! let prompter = IoPrompter::new("x\n7\n".as_bytes(), Vec::new());
//! let mut console = Console::new(prompter, messages);
//!
//! let n: u8 = console.ask_msg("ask", "retry", |s| s.parse().ok()).unwrap();
//! assert_eq!(n, 7);
//! ```

mod messages;
mod prompter;
mod screen;

pub use messages::Messages;
pub use prompter::{IoPrompter, LinePrompter, TerminalPrompter};
pub use screen::{NoopClearer, ScreenClearer, TerminalClearer};

use std::fmt::Display;

use crate::core::GameError;

/// Prefix put in front of every prompt line.
pub const PROMPT_PREFIX: &str = "=> ";

/// Messages, prompter, and screen clearer for one program run.
pub struct Console<P> {
    prompter: P,
    clearer: Box<dyn ScreenClearer>,
    messages: Messages,
    input_closed: bool,
}

impl<P: LinePrompter> Console<P> {
    /// Create a console that never clears the screen.
    pub fn new(prompter: P, messages: Messages) -> Self {
        Self {
            prompter,
            clearer: Box::new(NoopClearer),
            messages,
            input_closed: false,
        }
    }

    /// Use `clearer` between game phases.
    #[must_use]
    pub fn with_clearer(mut self, clearer: impl ScreenClearer + 'static) -> Self {
        self.clearer = Box::new(clearer);
        self
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Whether input has run out.
    pub fn input_closed(&self) -> bool {
        self.input_closed
    }

    /// Write a raw line.
    pub fn print(&mut self, text: &str) -> Result<(), GameError> {
        Ok(self.prompter.write_line(text)?)
    }

    pub fn blank_line(&mut self) -> Result<(), GameError> {
        self.print("")
    }

    /// Write `text` as a prompt line.
    pub fn prompt(&mut self, text: &str) -> Result<(), GameError> {
        Ok(self.prompter.write_line(&format!("{PROMPT_PREFIX}{text}"))?)
    }

    /// Look up `key` and write it as a prompt line.
    pub fn prompt_msg(&mut self, key: &str) -> Result<(), GameError> {
        let text = self.messages.get(key);
        Ok(self.prompter.write_line(&format!("{PROMPT_PREFIX}{text}"))?)
    }

    /// Render `key` with `vars` and write it as a prompt line.
    pub fn prompt_render(&mut self, key: &str, vars: &[(&str, &dyn Display)]) -> Result<(), GameError> {
        let text = self.messages.render(key, vars);
        self.prompt(&text)
    }

    pub fn clear(&mut self) -> Result<(), GameError> {
        Ok(self.clearer.clear()?)
    }

    /// Read one answer. End of input reads as an empty answer.
    pub fn read_answer(&mut self) -> Result<String, GameError> {
        match self.prompter.read_line()? {
            Some(line) => Ok(line),
            None => {
                self.input_closed = true;
                Ok(String::new())
            }
        }
    }

    /// Read answers until `parse` accepts one, writing `retry` after each
    /// rejected answer.
    ///
    /// Fails with `InputClosed` once input runs out, since no further
    /// answer can ever arrive.
    pub fn retry_until<T>(
        &mut self,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, GameError> {
        loop {
            let answer = self.read_answer()?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            if self.input_closed {
                return Err(GameError::InputClosed);
            }
            self.prompt(retry)?;
        }
    }

    /// Show `question` and read until `parse` accepts an answer.
    ///
    /// The question is repeated before every attempt.
    pub fn ask<T>(
        &mut self,
        question: &str,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, GameError> {
        loop {
            self.prompt(question)?;
            let answer = self.read_answer()?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            if self.input_closed {
                return Err(GameError::InputClosed);
            }
            self.prompt(retry)?;
        }
    }

    /// `ask` with both texts looked up by key.
    pub fn ask_msg<T>(
        &mut self,
        question_key: &str,
        retry_key: &str,
        parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, GameError> {
        let question = self.messages.get(question_key).to_string();
        let retry = self.messages.get(retry_key).to_string();
        self.ask(&question, &retry, parse)
    }

    /// Show `question_key` and test the answer with `accept`.
    ///
    /// End of input always declines.
    pub fn confirm(&mut self, question_key: &str, accept: impl Fn(&str) -> bool) -> Result<bool, GameError> {
        self.prompt_msg(question_key)?;
        let answer = self.read_answer()?;
        Ok(!self.input_closed && accept(&answer.to_lowercase()))
    }

    /// Show `key` and wait for any line.
    pub fn pause(&mut self, key: &str) -> Result<(), GameError> {
        self.prompt_msg(key)?;
        self.read_answer()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestConsole = Console<IoPrompter<&'static [u8], Vec<u8>>>;

    fn console(input: &'static str) -> TestConsole {
        let messages: Messages = [("q", "Question?"), ("r", "Nope."), ("yn", "Again?")]
            .into_iter()
            .collect();
        Console::new(IoPrompter::new(input.as_bytes(), Vec::new()), messages)
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_prompter().into_writer()).unwrap()
    }

    #[test]
    fn test_prompt_prefix() {
        let mut console = console("");
        console.prompt("hello").unwrap();
        console.print("raw").unwrap();
        assert_eq!(output(console), "=> hello\nraw\n");
    }

    #[test]
    fn test_ask_repeats_question_until_valid() {
        let mut console = console("a\nb\n3\n");
        let n: u32 = console.ask_msg("q", "r", |s| s.parse().ok()).unwrap();

        assert_eq!(n, 3);
        assert_eq!(
            output(console),
            "=> Question?\n=> Nope.\n=> Question?\n=> Nope.\n=> Question?\n"
        );
    }

    #[test]
    fn test_retry_until_does_not_repeat_question() {
        let mut console = console("x\n5\n");
        let n: u32 = console.retry_until("Nope.", |s| s.parse().ok()).unwrap();

        assert_eq!(n, 5);
        assert_eq!(output(console), "=> Nope.\n");
    }

    #[test]
    fn test_ask_fails_when_input_runs_out() {
        let mut console = console("bad\n");
        let err = console.ask_msg("q", "r", |s| s.parse::<u32>().ok()).unwrap_err();

        assert!(err.is_input_closed());
        assert!(console.input_closed());
    }

    #[test]
    fn test_ask_accepts_empty_answer_at_eof_if_parse_does() {
        let mut console = console("");
        let answer = console.ask_msg("q", "r", |s| Some(s.to_string())).unwrap();
        assert_eq!(answer, "");
    }

    #[test]
    fn test_confirm() {
        let mut console = console("Y\nn\n");
        assert!(console.confirm("yn", |s| s == "y").unwrap());
        assert!(!console.confirm("yn", |s| s == "y").unwrap());
    }

    #[test]
    fn test_confirm_declines_at_eof() {
        let mut console = console("");
        assert!(!console.confirm("yn", |s| s != "q").unwrap());
    }
}
