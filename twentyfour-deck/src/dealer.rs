//! # Dealer
//!
//! Draws four independent uniform face values in `1..=13` and rejects draws
//! that the configured [`ScreenStrategy`] considers unsolvable. After
//! [`DealerConfig::max_attempts`] rejected draws the dealer gives up and
//! returns the fixed fallback hand, which is solvable (`1 * 2 * 3 * 4`).
//!
//! Unsolvable multisets are sparse among the 13^4 possible draws, so the
//! expected number of attempts is close to one.

use crate::card::{HAND_SIZE, Hand, MAX_FACE, MIN_FACE};
use crate::{exclusion, solver};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Default cap on rejected draws before falling back.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Hand returned when every attempt was rejected.
pub const FALLBACK_FACES: [u8; HAND_SIZE] = [1, 2, 3, 4];

/// How the dealer decides that a draw is hopeless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenStrategy {
    /// Look the sorted draw up in the curated exclusion table.
    #[default]
    ExclusionTable,
    /// Run the exhaustive solver on every draw.
    Exhaustive,
}

impl ScreenStrategy {
    /// Canonical lowercase names, in declaration order.
    pub const STRS: &[&str] = &["table", "exhaustive"];

    /// Returns `true` if a draw with these faces must be redrawn.
    pub fn rejects(&self, faces: [u8; HAND_SIZE]) -> bool {
        match self {
            ScreenStrategy::ExclusionTable => exclusion::is_excluded(faces),
            ScreenStrategy::Exhaustive => !solver::solvable(faces),
        }
    }
}

impl fmt::Display for ScreenStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::STRS[*self as usize])
    }
}

/// Error returned when parsing a [`ScreenStrategy`] name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid screen strategy: {0}")]
pub struct ParseScreenStrategyError(smartstring::alias::String);

impl FromStr for ScreenStrategy {
    type Err = ParseScreenStrategyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(ScreenStrategy::ExclusionTable),
            "exhaustive" => Ok(ScreenStrategy::Exhaustive),
            other => Err(ParseScreenStrategyError(other.into())),
        }
    }
}

/// Settings for a [`Dealer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerConfig {
    /// Rejection rule applied to each draw.
    pub strategy: ScreenStrategy,
    /// Number of draws attempted before returning [`DealerConfig::fallback`].
    pub max_attempts: u32,
    /// Hand dealt when every attempt was rejected.
    pub fallback: Hand,
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            strategy: ScreenStrategy::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback: Hand::from_faces_unchecked(FALLBACK_FACES),
        }
    }
}

/// Deals hands by rejection sampling.
///
/// ```rust
/// # use twentyfour_deck::{Dealer, exclusion};
/// let dealer = Dealer::default();
/// let hand = dealer.deal();
/// assert!(!exclusion::is_excluded(hand.faces()) || hand.faces() == [1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    config: DealerConfig,
}

impl Dealer {
    /// Creates a dealer with the given settings.
    pub fn new(config: DealerConfig) -> Self {
        Self { config }
    }

    /// The dealer's settings.
    pub fn config(&self) -> &DealerConfig {
        &self.config
    }

    /// Deals a hand using the thread-local random source.
    pub fn deal(&self) -> Hand {
        self.deal_with(&mut rand::rng())
    }

    /// Deals a hand using the supplied random source.
    pub fn deal_with<R: Rng>(&self, rng: &mut R) -> Hand {
        let strategy = self.config.strategy;
        draw_screened(
            rng,
            self.config.max_attempts,
            self.config.fallback,
            |faces| strategy.rejects(faces),
        )
    }
}

fn draw<R: Rng>(rng: &mut R) -> [u8; HAND_SIZE] {
    std::array::from_fn(|_| rng.random_range(MIN_FACE..=MAX_FACE))
}

fn draw_screened<R, F>(rng: &mut R, max_attempts: u32, fallback: Hand, rejects: F) -> Hand
where
    R: Rng,
    F: Fn([u8; HAND_SIZE]) -> bool,
{
    for attempt in 1..=max_attempts {
        let faces = draw(rng);
        if rejects(faces) {
            log::trace!("attempt {attempt}: rejected {faces:?}");
            continue;
        }
        log::debug!("dealt {faces:?} after {attempt} attempt(s)");
        return Hand::from_faces_unchecked(faces);
    }
    log::warn!("no acceptable draw in {max_attempts} attempts, dealing fallback {fallback}");
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn dealt_hands_avoid_the_table_or_are_the_fallback() {
        init_logger();
        let dealer = Dealer::default();
        let mut rng = StdRng::seed_from_u64(24);
        for _ in 0..2000 {
            let hand = dealer.deal_with(&mut rng);
            assert!(
                !exclusion::is_excluded(hand.faces()) || hand.faces() == FALLBACK_FACES,
                "dealt excluded hand {hand}"
            );
            assert!(hand.faces().iter().all(|f| (MIN_FACE..=MAX_FACE).contains(f)));
        }
    }

    #[test]
    fn exhaustive_screen_only_deals_solvable_hands() {
        let dealer = Dealer::new(DealerConfig {
            strategy: ScreenStrategy::Exhaustive,
            ..DealerConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(solver::solvable(dealer.deal_with(&mut rng).faces()));
        }
    }

    #[test]
    fn falls_back_when_every_draw_is_rejected() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(1);
        let fallback = Hand::from_faces_unchecked(FALLBACK_FACES);
        let hand = draw_screened(&mut rng, 1000, fallback, |_| true);
        assert_eq!(hand, fallback);
    }

    #[test]
    fn zero_attempts_deals_fallback() {
        let dealer = Dealer::new(DealerConfig {
            max_attempts: 0,
            ..DealerConfig::default()
        });
        assert_eq!(dealer.deal().faces(), FALLBACK_FACES);
    }

    #[test]
    fn same_seed_same_hand() {
        let dealer = Dealer::default();
        let a = dealer.deal_with(&mut StdRng::seed_from_u64(99));
        let b = dealer.deal_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn strategy_names_round_trip() {
        for name in ScreenStrategy::STRS {
            let s: ScreenStrategy = name.parse().unwrap();
            assert_eq!(s.to_string(), *name);
        }
        assert!("oracle".parse::<ScreenStrategy>().is_err());
    }
}
