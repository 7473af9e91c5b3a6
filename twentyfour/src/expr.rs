//! # Expression input state machine
//!
//! The live expression of a round. Players extend it one symbol at a time and
//! every edit is checked against the entry grammar before it is applied:
//!
//! | State | Last symbol | Allowed next |
//! |-------|-------------|--------------|
//! | [`InputState::Empty`] | none | number, `(` |
//! | [`InputState::AfterValue`] | number or `)` | number, operator, `)` |
//! | [`InputState::AfterOperatorOrOpen`] | operator or `(` | number, `(` |
//!
//! A card value is appended as one indivisible symbol, so deleting `13`
//! removes the whole card. Cards may follow each other directly: the text
//! of two adjacent cards reads as one number once tokenized. A rejected edit leaves the expression and the
//! used-card set exactly as they were.

use crate::error::GameError;
use crate::oper::Operator;
use smartstring::alias::String;
use std::fmt::Write;
use twentyfour_deck::{Card, HAND_SIZE};

/// The set of card slots consumed by the expression.
///
/// ```rust
/// # use twentyfour::UsedSlots;
/// let mut used = UsedSlots::default();
/// assert!(used.insert(2));
/// assert!(!used.insert(2));
/// assert_eq!(used.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsedSlots(u8);

impl UsedSlots {
    #[inline]
    pub fn contains(&self, slot: usize) -> bool {
        slot < HAND_SIZE && self.0 & (1 << slot) != 0
    }

    /// Adds `slot`; returns `false` if it was already present or is not a
    /// slot of a hand.
    #[inline]
    pub fn insert(&mut self, slot: usize) -> bool {
        if slot >= HAND_SIZE || self.contains(slot) {
            return false;
        }
        self.0 |= 1 << slot;
        true
    }

    /// Removes `slot`; returns `false` if it was absent.
    #[inline]
    pub fn remove(&mut self, slot: usize) -> bool {
        let present = self.contains(slot);
        if present {
            self.0 &= !(1 << slot);
        }
        present
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// `true` once every card of the hand is used.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == HAND_SIZE
    }

    /// Used slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..HAND_SIZE).filter(|&s| self.contains(s))
    }
}

/// One entry of the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A card value, remembering which slot it came from.
    Number(Card),
    Operator(Operator),
    Open,
    Close,
}

impl Symbol {
    fn write_ascii(&self, out: &mut String) {
        match self {
            Symbol::Number(card) => {
                let _ = write!(out, "{}", card.face);
            }
            Symbol::Operator(op) => out.push(op.ascii()),
            Symbol::Open => out.push('('),
            Symbol::Close => out.push(')'),
        }
    }

    fn write_display(&self, out: &mut String) {
        match self {
            Symbol::Operator(op) => out.push(op.glyph()),
            other => other.write_ascii(out),
        }
    }
}

/// Entry-grammar state, derived from the last symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Empty,
    /// Last symbol is a number or `)`.
    AfterValue,
    /// Last symbol is an operator or `(`.
    AfterOperatorOrOpen,
}

/// The expression being built in a round, together with its used cards.
///
/// Only four edits exist: append a number, an operator or a bracket, and
/// delete the last symbol (plus [`Expression::clear`]). Interior symbols are
/// never edited.
///
/// ```rust
/// # use twentyfour::{Expression, Operator};
/// # use twentyfour_deck::Hand;
/// let hand = Hand::try_from_faces([3, 4, 12, 1]).unwrap();
/// let mut expr = Expression::new();
/// expr.push_number(hand.card(2).unwrap()).unwrap();
/// expr.push_operator(Operator::Mul).unwrap();
/// expr.push_number(hand.card(0).unwrap()).unwrap();
/// assert_eq!(expr.display().as_str(), "12×3");
/// assert_eq!(expr.source().as_str(), "12*3");
/// assert_eq!(expr.used().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    symbols: Vec<Symbol>,
    used: UsedSlots,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entry-grammar state.
    pub fn state(&self) -> InputState {
        match self.symbols.last() {
            None => InputState::Empty,
            Some(Symbol::Number(_) | Symbol::Close) => InputState::AfterValue,
            Some(Symbol::Operator(_) | Symbol::Open) => InputState::AfterOperatorOrOpen,
        }
    }

    /// Appends a card value.
    ///
    /// # Errors
    /// [`GameError::CardAlreadyUsed`] if the card's slot is already used.
    pub fn push_number(&mut self, card: Card) -> Result<(), GameError> {
        if self.used.contains(card.slot) {
            return Err(GameError::CardAlreadyUsed { slot: card.slot });
        }
        self.used.insert(card.slot);
        self.symbols.push(Symbol::Number(card));
        Ok(())
    }

    /// Appends an operator.
    ///
    /// # Errors
    /// [`GameError::MissingOperand`] if the expression is empty or ends with
    /// an operator or `(`.
    pub fn push_operator(&mut self, op: Operator) -> Result<(), GameError> {
        if self.state() != InputState::AfterValue {
            return Err(GameError::MissingOperand);
        }
        self.symbols.push(Symbol::Operator(op));
        Ok(())
    }

    /// Appends `(`.
    ///
    /// # Errors
    /// [`GameError::BadBracketPlacement`] after a number or `)`.
    pub fn push_open(&mut self) -> Result<(), GameError> {
        if self.state() == InputState::AfterValue {
            return Err(GameError::BadBracketPlacement);
        }
        self.symbols.push(Symbol::Open);
        Ok(())
    }

    /// Appends `)`.
    ///
    /// # Errors
    /// - [`GameError::EmptyExpression`] if nothing has been entered,
    /// - [`GameError::DanglingOperator`] after an operator or `(`,
    /// - [`GameError::UnmatchedBracket`] when no `(` is open.
    pub fn push_close(&mut self) -> Result<(), GameError> {
        match self.state() {
            InputState::Empty => return Err(GameError::EmptyExpression),
            InputState::AfterOperatorOrOpen => return Err(GameError::DanglingOperator),
            InputState::AfterValue => {}
        }
        if self.open_parens() == 0 {
            return Err(GameError::UnmatchedBracket);
        }
        self.symbols.push(Symbol::Close);
        Ok(())
    }

    /// Removes and returns the last symbol, releasing its card if it was a
    /// number. Does nothing on an empty expression.
    pub fn pop(&mut self) -> Option<Symbol> {
        let symbol = self.symbols.pop()?;
        if let Symbol::Number(card) = symbol {
            self.used.remove(card.slot);
        }
        Some(symbol)
    }

    /// Removes every symbol and releases every card.
    pub fn clear(&mut self) {
        self.symbols.clear();
        self.used = UsedSlots::default();
    }

    /// Number of `(` not yet closed.
    pub fn open_parens(&self) -> usize {
        self.symbols.iter().fold(0usize, |depth, s| match s {
            Symbol::Open => depth + 1,
            Symbol::Close => depth.saturating_sub(1),
            _ => depth,
        })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn used(&self) -> UsedSlots {
        self.used
    }

    /// Face values of the used cards, in entry order.
    pub fn used_values(&self) -> Vec<u8> {
        self.symbols
            .iter()
            .filter_map(|s| match s {
                Symbol::Number(card) => Some(card.face),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// ASCII text of the expression, as fed to the tokenizer.
    pub fn source(&self) -> String {
        let mut out = String::new();
        for s in &self.symbols {
            s.write_ascii(&mut out);
        }
        out
    }

    /// Text shown to players, with `×` and `÷`.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for s in &self.symbols {
            s.write_display(&mut out);
        }
        out
    }
}
