//! Line-oriented terminal input and output.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use dialoguer::console::Term;
use dialoguer::Input;

/// Reads answers and writes lines.
///
/// Both calls block. The only "failure" a game cares about is end of
/// input, reported as `Ok(None)`.
pub trait LinePrompter {
    /// Read one line with surrounding whitespace trimmed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Prompter over any buffered reader and writer.
///
/// `IoPrompter::stdio()` serves piped input; tests feed a byte slice and
/// inspect the written `Vec<u8>`.
#[derive(Debug)]
pub struct IoPrompter<R, W> {
    reader: R,
    writer: W,
}

impl IoPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> IoPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LinePrompter for IoPrompter<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim().to_string())),
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

/// Prompter for an interactive terminal, with dialoguer's line editing.
#[derive(Debug)]
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinePrompter for TerminalPrompter {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let answer = Input::<String>::new()
            .allow_empty(true)
            .report(false)
            .interact_text_on(&self.term);
        closed_on_eof(answer)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }
}

/// Ctrl-D and Ctrl-C end input the same way an exhausted pipe does.
fn closed_on_eof(answer: Result<String, dialoguer::Error>) -> io::Result<Option<String>> {
    match answer {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(dialoguer::Error::IO(e))
            if matches!(e.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted) =>
        {
            Ok(None)
        }
        Err(dialoguer::Error::IO(e)) => Err(e),
    }
}
