//! Line input for the interactive deletion flow.
//!
//! The flow only ever needs one line of text per question, so input is
//! abstracted to that. The terminal implementation uses dialoguer; piped
//! stdin and tests use a plain reader.

use std::io::{self, BufRead};

use dialoguer::{Input, theme::ColorfulTheme};

/// A source of answers to the flow's questions.
pub trait LineInput {
    /// Read one line. `Ok(None)` means the input ended or was interrupted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Terminal input rendered by dialoguer.
pub struct TerminalInput {
    theme: ColorfulTheme,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(err)) if is_end_of_input(&err) => Ok(None),
            Err(err) => Err(io::Error::other(err)),
        }
    }
}

/// Input read line by line from any buffered reader; prompts are not shown.
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineInput for ReaderInput<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(err) if is_end_of_input(&err) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Block on one line of input before exiting. Nothing is shown or read
/// unless `attended`; returns whether it waited.
pub fn wait_for_enter<I: LineInput>(input: &mut I, attended: bool) -> io::Result<bool> {
    if !attended {
        return Ok(false);
    }
    input.read_line("Press Enter to exit")?;
    Ok(true)
}

fn is_end_of_input(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_input_strips_line_endings_and_reports_eof() {
        let mut input = ReaderInput::new(io::Cursor::new("3\r\n y \n"));

        assert_eq!(input.read_line(">").unwrap(), Some("3".to_string()));
        assert_eq!(input.read_line(">").unwrap(), Some(" y ".to_string()));
        assert_eq!(input.read_line(">").unwrap(), None);
    }

    #[test]
    fn wait_for_enter_reads_only_when_attended() {
        let mut input = ReaderInput::new(io::Cursor::new("first\nsecond\n"));

        assert!(!wait_for_enter(&mut input, false).unwrap());
        assert_eq!(input.read_line(">").unwrap(), Some("first".to_string()));

        assert!(wait_for_enter(&mut input, true).unwrap());
        assert_eq!(input.read_line(">").unwrap(), None);
    }

    #[test]
    fn wait_for_enter_tolerates_closed_input() {
        let mut input = ReaderInput::new(io::Cursor::new(""));

        assert!(wait_for_enter(&mut input, true).unwrap());
    }
}
