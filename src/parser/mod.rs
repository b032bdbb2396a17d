//! GCode Tokenizer
//!
//! Turns raw lines into [`ParsedCommand`]s. The first word of a line is the
//! command keyword; every later word becomes a typed parameter. No command
//! or parameter catalogue is consulted, so free-text commands such as
//! `M117 message` are split into words like any other line.

pub mod classify;
pub mod lexer;

use std::io::BufRead;

pub use classify::classify_value;
pub use lexer::{Token, TokenKind, tokenize_line};

use crate::model::ParsedCommand;

/// Parse a single line of GCode
///
/// Returns `None` for empty, comment-only or line-number-only lines.
pub fn parse_line(line: &str) -> Option<ParsedCommand> {
    let raw_text = line.trim_end_matches(['\r', '\n']);
    let mut words = lexer::tokenize_line(raw_text)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Word)
        .map(|t| t.text)
        .peekable();

    // Skip an "N123" line number
    if words.peek().is_some_and(|w| is_line_number(w)) {
        words.next();
    }

    let keyword = words.next()?;
    let mut command = ParsedCommand::new(keyword.to_ascii_uppercase(), raw_text);

    for word in words {
        let mut chars = word.chars();
        let Some(letter) = chars.next() else {
            continue;
        };
        command.append(
            letter.to_ascii_uppercase().to_string(),
            classify_value(chars.as_str()),
        );
    }

    Some(command)
}

fn is_line_number(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some('N' | 'n'))
        && !chars.as_str().is_empty()
        && chars.all(|c| c.is_ascii_digit())
}

/// Streaming parser over a `BufRead` source
///
/// Yields `(line_number, command)` pairs, 1-based, skipping lines that
/// carry no command.
pub struct CommandReader<R: BufRead> {
    reader: R,
    line_number: usize,
    line_buffer: String,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            line_buffer: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = std::io::Result<(usize, ParsedCommand)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    if let Some(command) = parse_line(&self.line_buffer) {
                        return Some(Ok((self.line_number, command)));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
