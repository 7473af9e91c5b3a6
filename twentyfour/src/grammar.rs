//! # Grammar validator
//!
//! Re-checks the structure of a complete token sequence, independently of how
//! the expression was entered. Checks run in a fixed order and the first
//! failure is reported:
//!
//! 1. the sequence is non-empty and contains no unknown characters,
//! 2. no operator is directly followed by another operator,
//! 3. no number is directly followed by another number,
//! 4. the running bracket depth never goes negative and ends at zero,
//! 5. the first token is a number or `(`,
//! 6. the last token is a number or `)`.
//!
//! The validator is deliberately shallow: sequences such as `3(4)` pass here
//! and are rejected by the evaluator as malformed.

use crate::token::Token;
use thiserror::Error;

/// A structural defect found by [`check`].
///
/// Indices refer to positions in the token slice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrammarError {
    /// No tokens at all.
    #[error("empty expression")]
    Empty,

    /// A character that is neither a digit, an operator nor a bracket.
    #[error("unexpected symbol {symbol:?} at token {index}")]
    UnknownSymbol { index: usize, symbol: char },

    /// Two operators in a row.
    #[error("operator at token {index} follows another operator")]
    ConsecutiveOperators { index: usize },

    /// Two numbers in a row.
    #[error("number at token {index} follows another number")]
    ConsecutiveNumbers { index: usize },

    /// A `)` without a matching `(` before it.
    #[error("unmatched ')' at token {index}")]
    UnmatchedClose { index: usize },

    /// `(` left open at the end of the expression.
    #[error("{depth} unclosed '('")]
    UnclosedOpen { depth: usize },

    /// The expression starts with something other than a number or `(`.
    #[error("expression cannot start with {0}")]
    BadStart(Token),

    /// The expression ends with something other than a number or `)`.
    #[error("expression cannot end with {0}")]
    BadEnd(Token),
}

/// Checks `tokens` and reports the first structural defect.
///
/// ```rust
/// # use twentyfour::{grammar::{check, GrammarError}, tokenize};
/// assert!(check(&tokenize("3+4*(2-1)")).is_ok());
/// assert_eq!(
///     check(&tokenize("3++4")),
///     Err(GrammarError::ConsecutiveOperators { index: 2 })
/// );
/// ```
pub fn check(tokens: &[Token]) -> Result<(), GrammarError> {
    let (Some(&first), Some(&last)) = (tokens.first(), tokens.last()) else {
        return Err(GrammarError::Empty);
    };

    if let Some((index, symbol)) = tokens.iter().enumerate().find_map(|(i, t)| match t {
        Token::Unknown(c) => Some((i, *c)),
        _ => None,
    }) {
        return Err(GrammarError::UnknownSymbol { index, symbol });
    }

    for (i, pair) in tokens.windows(2).enumerate() {
        let index = i + 1;
        if pair[0].is_operator() && pair[1].is_operator() {
            return Err(GrammarError::ConsecutiveOperators { index });
        }
        if pair[0].is_number() && pair[1].is_number() {
            return Err(GrammarError::ConsecutiveNumbers { index });
        }
    }

    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(GrammarError::UnmatchedClose { index })?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(GrammarError::UnclosedOpen { depth });
    }

    if !(first.is_number() || first == Token::LParen) {
        return Err(GrammarError::BadStart(first));
    }
    if !(last.is_number() || last == Token::RParen) {
        return Err(GrammarError::BadEnd(last));
    }
    Ok(())
}

/// Returns `true` if `tokens` is structurally valid.
pub fn validate(tokens: &[Token]) -> bool {
    match check(tokens) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("rejected expression: {e}");
            false
        }
    }
}
