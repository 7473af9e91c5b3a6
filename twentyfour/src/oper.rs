//! Binary operators and their precedence.
//!
//! The game only knows the four arithmetic operators. Each has an ASCII
//! spelling (used in source text handed to the tokenizer) and a display
//! spelling (`×` and `÷` for multiplication and division) shown to players.
//! Both spellings parse back to the same [`Operator`].

use crate::eval::EvalError;
use std::fmt;
use std::str::FromStr;

/// An arithmetic operator.
///
/// | Variant | ASCII | Display | Precedence |
/// |---------|-------|---------|------------|
/// | [`Operator::Add`] | `+` | `+` | 1 |
/// | [`Operator::Sub`] | `-` | `-` | 1 |
/// | [`Operator::Mul`] | `*` | `×` | 2 |
/// | [`Operator::Div`] | `/` | `÷` | 2 |
///
/// All four are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operator {
    Add = 0,
    Sub = 1,
    Mul = 2,
    Div = 3,
}

impl Operator {
    /// All operators in declaration order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// ASCII spellings, in declaration order.
    pub const ASCII: &[char] = &['+', '-', '*', '/'];

    /// Display spellings, in declaration order.
    pub const GLYPHS: &[char] = &['+', '-', '×', '÷'];

    /// Binding strength: `+`/`-` bind at 1, `*`/`/` at 2.
    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// The ASCII character for this operator.
    #[inline]
    pub fn ascii(self) -> char {
        Self::ASCII[self as usize]
    }

    /// The character shown to players for this operator.
    #[inline]
    pub fn glyph(self) -> char {
        Self::GLYPHS[self as usize]
    }

    /// Computes `a op b` in double precision.
    ///
    /// # Errors
    /// [`EvalError::DivisionByZero`] when dividing by exactly zero.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div => {
                if b == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ascii())
    }
}

/// Error returned when a character or string is not an operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid operator: {0:?}")]
pub struct ParseOperatorError(pub char);

impl TryFrom<char> for Operator {
    type Error = ParseOperatorError;

    /// Accepts either the ASCII or the display spelling.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' | '×' => Ok(Operator::Mul),
            '/' | '÷' => Ok(Operator::Div),
            other => Err(ParseOperatorError(other)),
        }
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::try_from(c),
            (Some(c), Some(_)) => Err(ParseOperatorError(c)),
            (None, _) => Err(ParseOperatorError('\0')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicative_binds_tighter() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Div.precedence(), Operator::Mul.precedence());
        assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    }

    #[test]
    fn both_spellings_parse() {
        for op in Operator::ALL {
            assert_eq!(Operator::try_from(op.ascii()), Ok(op));
            assert_eq!(Operator::try_from(op.glyph()), Ok(op));
        }
        assert!("x".parse::<Operator>().is_err());
        assert_eq!("÷".parse::<Operator>(), Ok(Operator::Div));
    }

    #[test]
    fn rejects_non_operators() {
        assert_eq!(Operator::try_from('('), Err(ParseOperatorError('(')));
        assert!("".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn apply_matches_float_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Sub.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Mul.apply(4.0, 6.0), Ok(24.0));
        assert_eq!(Operator::Div.apply(8.0, 3.0), Ok(8.0 / 3.0));
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(Operator::Div.apply(5.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Operator::Div.apply(5.0, -0.0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn display_uses_ascii() {
        assert_eq!(Operator::Mul.to_string(), "*");
        assert_eq!(Operator::Div.glyph(), '÷');
    }
}
