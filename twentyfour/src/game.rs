//! # Round controller
//!
//! [`Game`] owns everything about a play session: the current hand, the
//! expression being built, the score, the transient message and the
//! scheduler holding delayed effects. Input events are applied one at a time
//! through `&mut self`; nothing runs concurrently.
//!
//! Delayed effects are never run behind the controller's back. They fire
//! from [`Game::poll`], which every input event also calls first, so a win's
//! next deal or a message's expiry is observed as soon as the player acts
//! again. Starting a round cancels every task of the previous one.

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, GameConfig};
use crate::error::GameError;
use crate::eval::evaluate;
use crate::expr::Expression;
use crate::grammar;
use crate::lexer::tokenize;
use crate::message::{Message, Severity};
use crate::oper::Operator;
use crate::scheduler::{Scheduler, Task, TaskId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use smartstring::alias::String;
use std::time::Duration;
use twentyfour_deck::{Dealer, HAND_SIZE, Hand};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player is editing the expression.
    Building,
    /// The expression reached the target; the next deal is scheduled.
    Won,
}

/// Result of a well-formed submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// The value reached the target. `score` is the new total.
    Won { value: f64, score: u32 },
    /// The value missed the target; the expression stays editable.
    Wrong { value: f64 },
}

/// A 24-point session.
///
/// # Examples
/// ```rust
/// # use twentyfour::{Game, GameConfig, ManualClock, Operator, Phase, SubmitOutcome};
/// # use twentyfour_deck::Hand;
/// # use std::time::Duration;
/// let clock = ManualClock::default();
/// let mut game = Game::with_clock(GameConfig::default(), clock.clone()).unwrap();
/// game.deal(Hand::try_from_faces([1, 2, 3, 4]).unwrap());
///
/// game.tap_number(0).unwrap();
/// game.tap_operator(Operator::Mul).unwrap();
/// game.tap_number(1).unwrap();
/// game.tap_operator(Operator::Mul).unwrap();
/// game.tap_number(2).unwrap();
/// game.tap_operator(Operator::Mul).unwrap();
/// game.tap_number(3).unwrap();
/// assert_eq!(game.display().as_str(), "1×2×3×4");
///
/// assert!(matches!(game.submit(), Ok(SubmitOutcome::Won { score: 10, .. })));
/// assert_eq!(game.phase(), Phase::Won);
///
/// clock.advance(Duration::from_millis(2000));
/// game.poll();
/// assert_eq!(game.phase(), Phase::Building);
/// assert!(game.expression().is_empty());
/// ```
#[derive(Debug)]
pub struct Game<C: Clock = SystemClock> {
    config: GameConfig,
    clock: C,
    dealer: Dealer,
    rng: Option<StdRng>,
    hand: Hand,
    expression: Expression,
    score: u32,
    round: u64,
    phase: Phase,
    message: Option<Message>,
    scheduler: Scheduler,
    advance_task: Option<TaskId>,
    clear_task: Option<TaskId>,
}

impl Game<SystemClock> {
    /// Starts a session on the wall clock and deals the first hand.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> Game<C> {
    /// Starts a session on `clock` and deals the first hand.
    ///
    /// # Errors
    /// The first invalid setting in `config`.
    pub fn with_clock(config: GameConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let dealer = Dealer::new(config.dealer);
        let rng = config.seed.map(StdRng::seed_from_u64);
        let mut game = Self {
            hand: dealer.config().fallback,
            config,
            clock,
            dealer,
            rng,
            expression: Expression::new(),
            score: 0,
            round: 0,
            phase: Phase::Building,
            message: None,
            scheduler: Scheduler::new(),
            advance_task: None,
            clear_task: None,
        };
        let hand = game.draw_hand();
        game.start_round(hand);
        Ok(game)
    }

    /// Appends the card in `slot`.
    pub fn tap_number(&mut self, slot: usize) -> Result<(), GameError> {
        self.edit(|expr, hand| {
            let card = hand.card(slot).ok_or(GameError::NoSuchCard { slot })?;
            expr.push_number(card)
        })
    }

    pub fn tap_operator(&mut self, op: Operator) -> Result<(), GameError> {
        self.edit(|expr, _| expr.push_operator(op))
    }

    pub fn tap_open_paren(&mut self) -> Result<(), GameError> {
        self.edit(|expr, _| expr.push_open())
    }

    pub fn tap_close_paren(&mut self) -> Result<(), GameError> {
        self.edit(|expr, _| expr.push_close())
    }

    /// Removes the last symbol. An empty expression is left as is.
    pub fn delete_last(&mut self) -> Result<(), GameError> {
        self.edit(|expr, _| {
            expr.pop();
            Ok(())
        })
    }

    pub fn clear(&mut self) -> Result<(), GameError> {
        self.edit(|expr, _| {
            expr.clear();
            Ok(())
        })
    }

    /// Checks, evaluates and scores the expression.
    ///
    /// A wrong value is not an error: it shows a message and returns
    /// [`SubmitOutcome::Wrong`], leaving the expression for correction.
    ///
    /// # Errors
    /// - [`GameError::EmptyExpression`] when nothing was entered,
    /// - [`GameError::IncompleteUsage`] unless all four cards are used,
    /// - [`GameError::InvalidExpression`] when validation or evaluation fails,
    /// - [`GameError::RoundOver`] after a win.
    pub fn submit(&mut self) -> Result<SubmitOutcome, GameError> {
        self.poll();
        if self.phase == Phase::Won {
            return Err(GameError::RoundOver);
        }
        let value = match self.judge() {
            Ok(value) => value,
            Err(e) => return Err(self.reject(e)),
        };

        if self.config.is_win(value) {
            self.score += self.config.points_per_win;
            self.phase = Phase::Won;
            let due = self.clock.now() + self.config.next_round_delay;
            self.advance_task = Some(self.scheduler.schedule(due, Task::AdvanceRound));
            log::info!(
                "round {} won with {} = {value}, score {}",
                self.round,
                self.expression.source(),
                self.score
            );
            self.show(
                Severity::Success,
                format!("correct! +{} points", self.config.points_per_win),
            );
            Ok(SubmitOutcome::Won {
                value,
                score: self.score,
            })
        } else {
            log::debug!("{} = {value}, not {}", self.expression.source(), self.config.target);
            self.show(
                Severity::Error,
                format!("the result is {value}, not {}", self.config.target),
            );
            Ok(SubmitOutcome::Wrong { value })
        }
    }

    /// Discards the current round and deals a new one. The score is kept.
    pub fn new_game(&mut self) {
        let hand = self.draw_hand();
        self.start_round(hand);
    }

    /// Discards the current round and starts one on `hand`.
    pub fn deal(&mut self, hand: Hand) {
        self.start_round(hand);
    }

    /// Fires every task due at the current clock time and returns them in
    /// firing order.
    pub fn poll(&mut self) -> Vec<Task> {
        let now = self.clock.now();
        let mut fired = Vec::new();
        for (id, task) in self.scheduler.take_due(now) {
            // An earlier task in this batch may have replaced the round.
            match task {
                Task::AdvanceRound if self.advance_task == Some(id) => {
                    self.advance_task = None;
                    self.new_game();
                }
                Task::ClearMessage if self.clear_task == Some(id) => {
                    self.clear_task = None;
                    self.message = None;
                }
                _ => continue,
            }
            log::debug!("fired {task:?} at {now:?}");
            fired.push(task);
        }
        fired
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The expression as shown to the player.
    pub fn display(&self) -> String {
        self.expression.display()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The visible message, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of rounds dealt so far, starting at 1.
    pub fn round_number(&self) -> u64 {
        self.round
    }

    /// Clock time of the next scheduled task.
    pub fn pending_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn draw_hand(&mut self) -> Hand {
        match self.rng.as_mut() {
            Some(rng) => self.dealer.deal_with(rng),
            None => self.dealer.deal(),
        }
    }

    fn start_round(&mut self, hand: Hand) {
        self.scheduler.cancel_all();
        self.advance_task = None;
        self.clear_task = None;
        self.message = None;
        self.expression.clear();
        self.hand = hand;
        self.phase = Phase::Building;
        self.round += 1;
        log::info!("round {} dealt {}", self.round, self.hand);
    }

    fn edit<F>(&mut self, f: F) -> Result<(), GameError>
    where
        F: FnOnce(&mut Expression, &Hand) -> Result<(), GameError>,
    {
        self.poll();
        if self.phase == Phase::Won {
            return Err(GameError::RoundOver);
        }
        f(&mut self.expression, &self.hand).map_err(|e| self.reject(e))
    }

    fn judge(&self) -> Result<f64, GameError> {
        if self.expression.is_empty() {
            return Err(GameError::EmptyExpression);
        }
        let used = self.expression.used().len();
        if used != HAND_SIZE {
            return Err(GameError::IncompleteUsage { used });
        }
        let tokens = tokenize(&self.expression.source());
        grammar::check(&tokens)?;
        Ok(evaluate(&tokens)?)
    }

    fn reject(&mut self, e: GameError) -> GameError {
        match &e {
            GameError::InvalidExpression(cause) => {
                log::debug!("rejected {}: {cause}", self.expression.source())
            }
            _ => log::debug!("rejected input: {e}"),
        }
        self.show(Severity::Error, e.to_string());
        e
    }

    /// Replaces the message and restarts its expiry.
    fn show(&mut self, severity: Severity, text: impl AsRef<str>) {
        if let Some(id) = self.clear_task.take() {
            self.scheduler.cancel(id);
        }
        let expires_at = self.clock.now() + self.config.message_ttl;
        self.message = Some(match severity {
            Severity::Error => Message::error(text, expires_at),
            Severity::Success => Message::success(text, expires_at),
        });
        self.clear_task = Some(self.scheduler.schedule(expires_at, Task::ClearMessage));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::Rejection;
    use crate::eval::EvalError;
    use crate::grammar::GrammarError;
    use Operator::{Add, Div, Mul, Sub};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn game_on(faces: [u8; 4]) -> (Game<ManualClock>, ManualClock) {
        init_logger();
        let clock = ManualClock::default();
        let mut game =
            Game::with_clock(GameConfig::default().with_seed(11), clock.clone()).unwrap();
        game.deal(Hand::try_from_faces(faces).unwrap());
        (game, clock)
    }

    /// Enters `8/(3-8/3)` on the hand `[8, 3, 8, 3]`.
    fn enter_classic(game: &mut Game<ManualClock>) {
        game.tap_number(0).unwrap();
        game.tap_operator(Div).unwrap();
        game.tap_open_paren().unwrap();
        game.tap_number(1).unwrap();
        game.tap_operator(Sub).unwrap();
        game.tap_number(2).unwrap();
        game.tap_operator(Div).unwrap();
        game.tap_number(3).unwrap();
        game.tap_close_paren().unwrap();
    }

    fn enter_sum(game: &mut Game<ManualClock>) {
        game.tap_number(0).unwrap();
        for slot in 1..4 {
            game.tap_operator(Add).unwrap();
            game.tap_number(slot).unwrap();
        }
    }

    #[test]
    fn classic_hand_wins_and_advances() {
        let (mut game, clock) = game_on([8, 3, 8, 3]);
        let round = game.round_number();
        enter_classic(&mut game);
        assert_eq!(game.display().as_str(), "8÷(3-8÷3)");
        assert!(game.expression().used().is_full());

        let Ok(SubmitOutcome::Won { value, score }) = game.submit() else {
            panic!("expected a win");
        };
        assert!((value - 24.0).abs() < 1e-4);
        assert_eq!(score, 10);
        assert_eq!(game.score(), 10);
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.message().map(|m| m.severity), Some(Severity::Success));
        assert_eq!(game.pending_deadline(), Some(ms(2000)));

        clock.advance(ms(1999));
        assert!(game.poll().is_empty());
        assert_eq!(game.round_number(), round);

        clock.advance(ms(1));
        assert_eq!(game.poll(), vec![Task::AdvanceRound]);
        assert_eq!(game.round_number(), round + 1);
        assert_eq!(game.phase(), Phase::Building);
        assert!(game.expression().is_empty());
        assert_eq!(game.message(), None);
        assert_eq!(game.pending_deadline(), None);
        assert_eq!(game.score(), 10);
    }

    #[test]
    fn edits_after_a_win_are_refused() {
        let (mut game, _clock) = game_on([8, 3, 8, 3]);
        enter_classic(&mut game);
        game.submit().unwrap();
        assert_eq!(game.delete_last(), Err(GameError::RoundOver));
        assert_eq!(game.submit(), Err(GameError::RoundOver));
        assert_eq!(game.score(), 10);
        assert_eq!(game.message().map(|m| m.severity), Some(Severity::Success));
    }

    #[test]
    fn input_after_the_delay_lands_in_the_next_round() {
        let (mut game, clock) = game_on([8, 3, 8, 3]);
        enter_classic(&mut game);
        game.submit().unwrap();
        clock.advance(ms(2500));
        game.tap_number(2).unwrap();
        assert_eq!(game.phase(), Phase::Building);
        assert_eq!(game.expression().len(), 1);
    }

    #[test]
    fn adjacent_cards_form_a_two_digit_number() {
        let (mut game, _clock) = game_on([2, 4, 1, 1]);
        game.tap_number(0).unwrap();
        game.tap_number(1).unwrap();
        game.tap_operator(Mul).unwrap();
        game.tap_number(2).unwrap();
        game.tap_operator(Mul).unwrap();
        game.tap_number(3).unwrap();
        assert_eq!(game.display().as_str(), "24×1×1");
        assert_eq!(
            game.submit(),
            Ok(SubmitOutcome::Won {
                value: 24.0,
                score: 10
            })
        );
    }

    #[test]
    fn reused_card_is_rejected_without_change() {
        let (mut game, _clock) = game_on([3, 4, 12, 1]);
        game.tap_number(0).unwrap();
        game.tap_operator(Add).unwrap();
        assert_eq!(
            game.tap_number(0),
            Err(GameError::CardAlreadyUsed { slot: 0 })
        );
        assert_eq!(game.expression().source().as_str(), "3+");
        assert_eq!(game.expression().used().len(), 1);
        let message = game.message().unwrap();
        assert_eq!(message.severity, Severity::Error);
        assert_eq!(message.expires_at, ms(3000));
    }

    #[test]
    fn delete_releases_the_card() {
        let (mut game, _clock) = game_on([3, 4, 12, 1]);
        game.tap_number(0).unwrap();
        game.tap_operator(Add).unwrap();
        game.tap_number(1).unwrap();
        assert_eq!(game.expression().used().len(), 2);
        game.delete_last().unwrap();
        assert_eq!(game.expression().source().as_str(), "3+");
        game.delete_last().unwrap();
        assert_eq!(game.expression().source().as_str(), "3");
        assert_eq!(game.expression().used().len(), 1);
        game.clear().unwrap();
        assert!(game.expression().is_empty());
        game.delete_last().unwrap();
        assert!(game.expression().is_empty());
    }

    #[test]
    fn grammar_errors_while_typing() {
        let (mut game, _clock) = game_on([3, 4, 12, 1]);
        assert_eq!(game.tap_operator(Mul), Err(GameError::MissingOperand));
        assert_eq!(game.tap_close_paren(), Err(GameError::EmptyExpression));
        game.tap_number(2).unwrap();
        assert_eq!(game.tap_open_paren(), Err(GameError::BadBracketPlacement));
        assert_eq!(game.tap_close_paren(), Err(GameError::UnmatchedBracket));
        game.tap_operator(Mul).unwrap();
        assert_eq!(game.tap_close_paren(), Err(GameError::DanglingOperator));
        assert_eq!(game.tap_number(4), Err(GameError::NoSuchCard { slot: 4 }));
        assert_eq!(game.display().as_str(), "12×");
    }

    #[test]
    fn submit_requires_every_card() {
        let (mut game, _clock) = game_on([3, 4, 12, 1]);
        assert_eq!(game.submit(), Err(GameError::EmptyExpression));
        game.tap_number(0).unwrap();
        game.tap_operator(Add).unwrap();
        game.tap_number(1).unwrap();
        assert_eq!(game.submit(), Err(GameError::IncompleteUsage { used: 2 }));
        assert_eq!(game.phase(), Phase::Building);
    }

    #[test]
    fn wrong_result_keeps_the_expression() {
        let (mut game, _clock) = game_on([1, 2, 3, 4]);
        enter_sum(&mut game);
        assert_eq!(game.submit(), Ok(SubmitOutcome::Wrong { value: 10.0 }));
        assert_eq!(game.phase(), Phase::Building);
        assert_eq!(game.score(), 0);
        assert_eq!(game.expression().source().as_str(), "1+2+3+4");
        assert_eq!(
            game.message().map(|m| m.text.as_str()),
            Some("the result is 10, not 24")
        );
    }

    #[test]
    fn division_by_zero_is_an_invalid_expression() {
        let (mut game, _clock) = game_on([5, 5, 5, 1]);
        game.tap_number(0).unwrap();
        game.tap_operator(Div).unwrap();
        game.tap_open_paren().unwrap();
        game.tap_number(1).unwrap();
        game.tap_operator(Sub).unwrap();
        game.tap_number(2).unwrap();
        game.tap_close_paren().unwrap();
        game.tap_operator(Mul).unwrap();
        game.tap_number(3).unwrap();
        assert_eq!(
            game.submit(),
            Err(GameError::InvalidExpression(Rejection::Eval(
                EvalError::DivisionByZero
            )))
        );
        assert_eq!(game.expression().source().as_str(), "5/(5-5)*1");
        assert_eq!(
            game.message().map(|m| m.text.as_str()),
            Some("invalid expression")
        );
    }

    #[test]
    fn unclosed_bracket_fails_validation() {
        let (mut game, _clock) = game_on([1, 2, 3, 4]);
        game.tap_open_paren().unwrap();
        enter_sum(&mut game);
        assert_eq!(
            game.submit(),
            Err(GameError::InvalidExpression(Rejection::Grammar(
                GrammarError::UnclosedOpen { depth: 1 }
            )))
        );
    }

    #[test]
    fn messages_expire_and_newer_ones_survive_older_timers() {
        let (mut game, clock) = game_on([1, 2, 3, 4]);
        let _ = game.tap_operator(Add);
        assert!(game.message().is_some());

        clock.advance(ms(2000));
        let _ = game.tap_close_paren();
        assert_eq!(game.message().map(|m| m.expires_at), Some(ms(5000)));

        clock.advance(ms(1000));
        assert!(game.poll().is_empty());
        assert!(game.message().is_some());

        clock.advance(ms(2000));
        assert_eq!(game.poll(), vec![Task::ClearMessage]);
        assert_eq!(game.message(), None);
        assert_eq!(game.pending_deadline(), None);
    }

    #[test]
    fn new_game_cancels_the_pending_advance() {
        let (mut game, clock) = game_on([8, 3, 8, 3]);
        enter_classic(&mut game);
        game.submit().unwrap();
        game.new_game();
        let round = game.round_number();
        assert_eq!(game.phase(), Phase::Building);
        assert_eq!(game.pending_deadline(), None);
        assert_eq!(game.message(), None);
        assert_eq!(game.score(), 10);

        clock.advance(ms(10_000));
        assert!(game.poll().is_empty());
        assert_eq!(game.round_number(), round);
    }

    #[test]
    fn score_accumulates_across_rounds() {
        let (mut game, _clock) = game_on([8, 3, 8, 3]);
        enter_classic(&mut game);
        game.submit().unwrap();
        game.deal(Hand::try_from_faces([8, 3, 8, 3]).unwrap());
        enter_classic(&mut game);
        assert!(matches!(
            game.submit(),
            Ok(SubmitOutcome::Won { score: 20, .. })
        ));
    }

    #[test]
    fn seeded_sessions_deal_the_same_hands() {
        init_logger();
        let config = GameConfig::default().with_seed(2024);
        let mut a = Game::with_clock(config.clone(), ManualClock::default()).unwrap();
        let mut b = Game::with_clock(config, ManualClock::default()).unwrap();
        assert_eq!(a.hand(), b.hand());
        a.new_game();
        b.new_game();
        assert_eq!(a.hand(), b.hand());
        assert_eq!(a.round_number(), 2);
    }

    #[test]
    fn invalid_config_is_refused() {
        let mut config = GameConfig::default();
        config.dealer.max_attempts = 0;
        assert!(matches!(
            Game::with_clock(config, ManualClock::default()),
            Err(ConfigError::ZeroAttempts)
        ));
    }
}
