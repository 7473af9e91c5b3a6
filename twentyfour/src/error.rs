//! # Game error type
//!
//! [`GameError`] is the single error surface of the round controller. Input
//! errors block the attempted edit and leave the expression untouched; submit
//! errors leave the expression editable. None of them is fatal.
//!
//! Validator and evaluator rejections are kept inside
//! [`GameError::InvalidExpression`] as a [`Rejection`], so logs retain the
//! precise cause while players see one umbrella message.

use crate::eval::EvalError;
use crate::grammar::GrammarError;
use thiserror::Error;

/// The precise reason a submitted expression was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// Structural defect found by the grammar validator.
    #[error("grammar: {0}")]
    Grammar(#[from] GrammarError),

    /// Arithmetic failure during evaluation.
    #[error("evaluation: {0}")]
    Eval(#[from] EvalError),
}

/// Represents all recoverable errors raised while playing a round.
///
/// # Examples
/// ```rust
/// # use twentyfour::{EvalError, GameError, Rejection};
/// let err: GameError = Rejection::from(EvalError::DivisionByZero).into();
/// assert!(matches!(err, GameError::InvalidExpression(Rejection::Eval(_))));
/// assert_eq!(err.to_string(), "invalid expression");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// The card in this slot is already part of the expression.
    #[error("card {slot} is already used")]
    CardAlreadyUsed { slot: usize },

    /// There is no card in this slot.
    #[error("there is no card {slot}")]
    NoSuchCard { slot: usize },

    /// An operator needs a number or `)` before it.
    #[error("enter a number first")]
    MissingOperand,

    /// `(` may only open the expression or follow an operator or `(`.
    #[error("'(' must start the expression or follow an operator")]
    BadBracketPlacement,

    /// `)` cannot follow an operator or `(`.
    #[error("')' must follow a number or ')'")]
    DanglingOperator,

    /// `)` without an open `(` to close.
    #[error("no '(' to close")]
    UnmatchedBracket,

    /// The expression is empty.
    #[error("the expression is empty")]
    EmptyExpression,

    /// Submitted before all four cards were used.
    #[error("use all four cards ({used} used)")]
    IncompleteUsage { used: usize },

    /// The validator or the evaluator rejected the submitted expression.
    #[error("invalid expression")]
    InvalidExpression(#[from] Rejection),

    /// The round is already won and waiting for the next deal.
    #[error("the round is over")]
    RoundOver,
}

impl From<GrammarError> for GameError {
    fn from(e: GrammarError) -> Self {
        GameError::InvalidExpression(e.into())
    }
}

impl From<EvalError> for GameError {
    fn from(e: EvalError) -> Self {
        GameError::InvalidExpression(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_error_trait_obj(e: &dyn std::error::Error) -> &dyn std::error::Error {
        e
    }

    #[test]
    fn evaluator_failures_map_to_invalid_expression() {
        let err: GameError = EvalError::DivisionByZero.into();
        assert_eq!(
            err,
            GameError::InvalidExpression(Rejection::Eval(EvalError::DivisionByZero))
        );
        assert_eq!(err.to_string(), "invalid expression");
        let _ = _assert_error_trait_obj(&err);
    }

    #[test]
    fn grammar_failures_map_to_invalid_expression() {
        let err: GameError = GrammarError::Empty.into();
        let GameError::InvalidExpression(rejection) = err else {
            panic!("expected InvalidExpression");
        };
        assert_eq!(rejection.to_string(), "grammar: empty expression");
    }

    #[test]
    fn messages_name_the_slot() {
        assert!(GameError::CardAlreadyUsed { slot: 2 }.to_string().contains('2'));
        assert!(GameError::IncompleteUsage { used: 3 }.to_string().contains("3 used"));
    }

    // If GameError ever stops being Send + Sync + 'static these will fail to compile.
    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn game_error_is_send_sync_static() {
        _assert_send_sync_static::<GameError>();
    }
}
