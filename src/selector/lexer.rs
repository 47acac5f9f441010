//! Selector pattern lexer.
//!
//! Splits raw pattern text like `body.*[light]` into literal text runs and
//! `[name]` capability filter tokens. Segment splitting on `.` happens later,
//! once every filter has been cut out of the text.

use super::error::PatternSyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text between filters, still containing `.` separators.
    Text(&'a str),
    /// `[name]`; `offset` is the byte offset of the opening `[`.
    Filter { name: &'a str, offset: usize },
}

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Read up to (not including) the next `[`, or to end of input.
    fn read_text(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.find('[').unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Read a `[name]` token. The lexer must be positioned on the `[`.
    fn read_filter(&mut self) -> Result<Token<'a>, PatternSyntaxError> {
        let offset = self.pos;
        let inner = &self.input[offset + 1..];
        // A nested `[` means the first one was never closed.
        let close = match (inner.find(']'), inner.find('[')) {
            (Some(close), Some(open)) if open < close => None,
            (close, _) => close,
        };
        let Some(close) = close else {
            return Err(PatternSyntaxError::UnterminatedFilter { offset });
        };
        self.pos = offset + 1 + close + 1;
        Ok(Token::Filter {
            name: &inner[..close],
            offset,
        })
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>, PatternSyntaxError> {
        let mut tokens = Vec::new();

        while self.pos < self.input.len() {
            if self.rest().starts_with('[') {
                tokens.push(self.read_filter()?);
            } else {
                tokens.push(Token::Text(self.read_text()));
            }
        }

        Ok(tokens)
    }
}

/// Lenient scan used where a pattern must be scored without being validated:
/// an unterminated `[` and everything after it is kept as literal text.
pub fn split_filters(input: &str) -> (String, usize) {
    let mut text = String::with_capacity(input.len());
    let mut filters = 0;
    let mut lexer = Lexer::new(input);

    while lexer.pos < input.len() {
        if lexer.rest().starts_with('[') {
            match lexer.read_filter() {
                Ok(_) => filters += 1,
                Err(_) => {
                    text.push_str(lexer.rest());
                    break;
                }
            }
        } else {
            text.push_str(lexer.read_text());
        }
    }

    (text, filters)
}
