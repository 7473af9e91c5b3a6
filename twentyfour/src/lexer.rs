//! # Tokenizer
//!
//! A single left-to-right scan over expression text:
//!
//! - consecutive ASCII digits accumulate into one [`Token::Number`],
//! - `+ - * /` and the display glyphs `×` `÷` become [`Token::Operator`],
//! - `(` and `)` become [`Token::LParen`] / [`Token::RParen`],
//! - whitespace is skipped,
//! - anything else becomes [`Token::Unknown`].
//!
//! The scan never fails. Structural problems (two numbers in a row, a
//! dangling operator, stray characters) are left to [`crate::grammar`].

use crate::oper::Operator;
use crate::token::Token;
use std::iter::Peekable;
use std::str::CharIndices;

/// Streaming tokenizer over a borrowed expression string.
///
/// ```rust
/// # use twentyfour::{Lexer, Token};
/// let mut lexer = Lexer::new("12+(3");
/// assert_eq!(lexer.next(), Some(Token::Number(12.0)));
/// assert_eq!(lexer.position(), 2);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(i, _)) => i,
            None => self.input.len(),
        }
    }

    /// Scans the digit run whose first digit `first` sits at byte `start`.
    fn number(&mut self, start: usize, first: char) -> Token {
        while self.chars.next_if(|&(_, c)| c.is_ascii_digit()).is_some() {}
        let end = self.position();
        self.input[start..end]
            .parse()
            .map_or(Token::Unknown(first), Token::Number)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let (offset, c) = self.chars.next()?;
            let token = match c {
                c if c.is_whitespace() => continue,
                c if c.is_ascii_digit() => self.number(offset, c),
                '(' => Token::LParen,
                ')' => Token::RParen,
                c => match Operator::try_from(c) {
                    Ok(op) => Token::Operator(op),
                    Err(_) => Token::Unknown(c),
                },
            };
            log::trace!("token {token:?} at {offset}");
            return Some(token);
        }
    }
}

/// Converts expression text into its token sequence.
///
/// ```rust
/// # use twentyfour::{tokenize, Operator, Token};
/// assert_eq!(
///     tokenize("3+4*(2-1)"),
///     vec![
///         Token::Number(3.0),
///         Token::Operator(Operator::Add),
///         Token::Number(4.0),
///         Token::Operator(Operator::Mul),
///         Token::LParen,
///         Token::Number(2.0),
///         Token::Operator(Operator::Sub),
///         Token::Number(1.0),
///         Token::RParen,
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).collect()
}
