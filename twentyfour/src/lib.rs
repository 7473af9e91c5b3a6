//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! The 24-point puzzle engine.
//!
//! Four cards are dealt by [`twentyfour_deck`]; the player builds an
//! arithmetic expression that uses every card once and tries to reach 24.
//! This crate contains the pieces between the first tap and the win:
//!
//! - [`expr`]: the expression input state machine, checked at every keystroke,
//! - [`lexer`] and [`token`]: turning finished expression text into tokens,
//! - [`grammar`]: structural validation of a token sequence,
//! - [`eval`]: two-stack precedence evaluation,
//! - [`game`]: the round controller, scoring and scheduled round changes,
//! - [`clock`], [`scheduler`] and [`message`]: the controller's time model.
//!
//! ## Example
//!
//! ```rust
//! use twentyfour::{evaluate, grammar, tokenize, EvalError};
//!
//! let tokens = tokenize("8/(3-8/3)");
//! assert!(grammar::validate(&tokens));
//! let value = evaluate(&tokens).unwrap();
//! assert!((value - 24.0).abs() < 1e-4);
//!
//! assert_eq!(evaluate(&tokenize("5/(5-5)")), Err(EvalError::DivisionByZero));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod eval;
pub mod expr;
pub mod game;
pub mod grammar;
pub mod lexer;
pub mod message;
pub mod oper;
pub mod scheduler;
pub mod token;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, GameConfig};
pub use error::{GameError, Rejection};
pub use eval::{EvalError, Evaluation, evaluate};
pub use expr::{Expression, InputState, Symbol, UsedSlots};
pub use game::{Game, Phase, SubmitOutcome};
pub use grammar::{GrammarError, check, validate};
pub use lexer::{Lexer, tokenize};
pub use message::{Message, Severity};
pub use oper::{Operator, ParseOperatorError};
pub use scheduler::{Scheduler, Task, TaskId};
pub use token::Token;
