//! # Expression tokens
//!
//! [`Token`] is the unit consumed by the grammar validator and the evaluator.
//! Tokens are derived from expression text at submit time and are never
//! stored in the round state.

use crate::oper::Operator;
use std::fmt;

/// A lexical token of an arithmetic expression.
///
/// # Variants
///
/// - [`Token::Number`]: a run of decimal digits, read as a float.
/// - [`Token::Operator`]: one of `+ - * /`.
/// - [`Token::LParen`] / [`Token::RParen`]: grouping brackets.
/// - [`Token::Unknown`]: any other character. The tokenizer never fails, so
///   stray characters are carried through and rejected by the validator.
///
/// # Example
/// ```rust
/// # use twentyfour::{Operator, Token};
/// let t = Token::Operator(Operator::Mul);
/// assert!(t.is_operator());
/// assert_eq!(t.to_string(), "*");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal.
    Number(f64),
    /// Binary operator.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Unrecognised character.
    Unknown(char),
}

impl Token {
    /// `true` for [`Token::Number`].
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// `true` for [`Token::Operator`].
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Unknown(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifiers() {
        assert!(Token::Number(3.0).is_number());
        assert!(!Token::Number(3.0).is_operator());
        assert!(Token::from(Operator::Sub).is_operator());
        assert!(!Token::LParen.is_operator());
        assert!(!Token::Unknown('?').is_number());
    }

    #[test]
    fn display_renders_source_form() {
        let toks = [
            Token::LParen,
            Token::Number(12.0),
            Token::Operator(Operator::Div),
            Token::Number(3.0),
            Token::RParen,
        ];
        let text: String = toks.iter().map(|t| t.to_string()).collect();
        assert_eq!(text, "(12/3)");
    }
}
