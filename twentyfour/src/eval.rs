//! # Arithmetic evaluator
//!
//! Evaluates a token sequence in one left-to-right pass with two stacks, one
//! for operands and one for pending operators and open brackets
//! (shunting-yard / precedence climbing):
//!
//! - a number is pushed on the operand stack,
//! - `(` is pushed on the operator stack,
//! - `)` applies pending operators down to the matching `(`, which is dropped,
//! - an operator first applies every pending operator of greater or equal
//!   precedence (stopping at `(`), then is pushed,
//! - at the end all pending operators are applied.
//!
//! Exactly one operand must remain. Failures are returned as [`EvalError`];
//! nothing panics on malformed input.

use crate::oper::Operator;
use crate::token::Token;
use thiserror::Error;

/// Why an evaluation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A `/` whose right operand is exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The token sequence does not form a single expression: missing
    /// operands, unbalanced brackets, leftover values or unknown symbols.
    /// Unreachable for sequences accepted by [`crate::grammar::check`],
    /// except juxtaposed groups such as `3(4)`.
    #[error("malformed expression")]
    MalformedExpression,
}

/// Result of evaluating an expression.
pub type Evaluation = Result<f64, EvalError>;

#[derive(Debug, Clone, Copy)]
enum Pending {
    Open,
    Op(Operator),
}

/// The two evaluation stacks.
#[derive(Debug, Default)]
struct Stacks {
    operands: Vec<f64>,
    operators: Vec<Pending>,
}

impl Stacks {
    /// Pops one operator and its two operands and pushes `a op b`.
    fn reduce(&mut self, op: Operator) -> Result<(), EvalError> {
        let b = self.operands.pop().ok_or(EvalError::MalformedExpression)?;
        let a = self.operands.pop().ok_or(EvalError::MalformedExpression)?;
        let value = op.apply(a, b)?;
        log::trace!("reduce {a} {op} {b} = {value}");
        self.operands.push(value);
        Ok(())
    }

    /// Applies pending operators while they bind at least as tightly as `min`.
    fn reduce_while(&mut self, min: u8) -> Result<(), EvalError> {
        while let Some(&Pending::Op(top)) = self.operators.last() {
            if top.precedence() < min {
                break;
            }
            self.operators.pop();
            self.reduce(top)?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), EvalError> {
        self.reduce_while(0)?;
        match self.operators.pop() {
            Some(Pending::Open) => Ok(()),
            _ => Err(EvalError::MalformedExpression),
        }
    }

    fn finish(mut self) -> Evaluation {
        self.reduce_while(0)?;
        if !self.operators.is_empty() {
            return Err(EvalError::MalformedExpression);
        }
        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::MalformedExpression),
        }
    }

    fn dump(&self, token: &Token) {
        log::trace!(
            "at {} operands {:?} operators {:?}",
            token,
            self.operands,
            self.operators
        );
    }
}

/// Evaluates `tokens` with standard precedence: `*` and `/` before `+` and
/// `-`, left to right within a level, brackets first.
///
/// ```rust
/// # use twentyfour::{evaluate, tokenize, EvalError};
/// let v = evaluate(&tokenize("8/(3-8/3)")).unwrap();
/// assert!((v - 24.0).abs() < 1e-4);
/// assert_eq!(evaluate(&tokenize("5/(5-5)")), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(tokens: &[Token]) -> Evaluation {
    let mut stacks = Stacks::default();
    for token in tokens {
        if log::log_enabled!(log::Level::Trace) {
            stacks.dump(token);
        }
        match *token {
            Token::Number(n) => stacks.operands.push(n),
            Token::LParen => stacks.operators.push(Pending::Open),
            Token::RParen => stacks.close()?,
            Token::Operator(op) => {
                stacks.reduce_while(op.precedence())?;
                stacks.operators.push(Pending::Op(op));
            }
            Token::Unknown(_) => return Err(EvalError::MalformedExpression),
        }
    }
    stacks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn eval(s: &str) -> Evaluation {
        evaluate(&tokenize(s))
    }

    fn assert_close(s: &str, expected: f64) {
        let v = eval(s).unwrap_or_else(|e| panic!("{s}: {e}"));
        assert!((v - expected).abs() < 1e-9, "{s} = {v}, expected {expected}");
    }

    #[test]
    fn classic_fraction_solution() {
        init_logger();
        let v = eval("8/(3-8/3)").unwrap();
        assert!((v - 24.0).abs() < 1e-4);
    }

    #[test]
    fn precedence_and_brackets() {
        assert_close("3+4*(2-1)", 7.0);
        assert_close("1+2*3", 7.0);
        assert_close("(1+2)*3", 9.0);
        assert_close("2*3+4*5", 26.0);
        assert_close("((13))", 13.0);
    }

    #[test]
    fn same_level_is_left_associative() {
        assert_close("8-4-2", 2.0);
        assert_close("24/4/2", 3.0);
        assert_close("8-4+2", 6.0);
        assert_close("12/3*2", 8.0);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval("5/(5-5)"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("1/0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn fractional_intermediate_results() {
        assert_close("1/3*3", 1.0);
        let v = eval("(1+1/7)*(2+1)").unwrap();
        assert!((v - 24.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_sequences() {
        assert_eq!(eval(""), Err(EvalError::MalformedExpression));
        assert_eq!(eval("3+"), Err(EvalError::MalformedExpression));
        assert_eq!(eval("3)"), Err(EvalError::MalformedExpression));
        assert_eq!(eval("(3"), Err(EvalError::MalformedExpression));
        assert_eq!(eval("3(4)"), Err(EvalError::MalformedExpression));
        assert_eq!(eval("()"), Err(EvalError::MalformedExpression));
        assert_eq!(eval("(+3)"), Err(EvalError::MalformedExpression));
        assert_eq!(eval("3?4"), Err(EvalError::MalformedExpression));
    }
}
