//! GCode Lexer
//!
//! Fast, simple tokenization of GCode lines into words and comments.
//! Classification of words into command/parameter happens in the parser.

/// Token types in GCode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Letter-led word like "G1", "X10.5", "E"
    Word,
    /// Comment (semicolon or parenthetical)
    Comment,
    /// Trailing "*NN" checksum
    Checksum,
}

/// A token with its text content
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Tokenize a line of GCode into tokens
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        match ch {
            // Skip whitespace
            c if c.is_whitespace() => continue,

            // Semicolon comment: consume rest of line
            ';' => {
                tokens.push(Token {
                    kind: TokenKind::Comment,
                    text: &line[start_idx..],
                });
                break;
            }

            // Checksum runs to the end of the line
            '*' => {
                tokens.push(Token {
                    kind: TokenKind::Checksum,
                    text: &line[start_idx..],
                });
                break;
            }

            // Parenthetical comment
            '(' => {
                let mut end_idx = line.len();

                for (idx, ch) in chars.by_ref() {
                    if ch == ')' {
                        end_idx = idx + 1;
                        break;
                    }
                }

                tokens.push(Token {
                    kind: TokenKind::Comment,
                    text: &line[start_idx..end_idx],
                });
            }

            // Letter starts a word; it runs until whitespace or a delimiter
            c if c.is_ascii_alphabetic() => {
                let mut end_idx = start_idx + c.len_utf8();

                while let Some(&(idx, next_ch)) = chars.peek() {
                    if next_ch.is_whitespace() || matches!(next_ch, ';' | '(' | '*') {
                        break;
                    }
                    end_idx = idx + next_ch.len_utf8();
                    chars.next();
                }

                tokens.push(Token {
                    kind: TokenKind::Word,
                    text: &line[start_idx..end_idx],
                });
            }

            // Skip other characters (malformed input)
            _ => continue,
        }
    }

    tokens
}
