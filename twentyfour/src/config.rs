//! # Game configuration
//!
//! [`GameConfig`] collects every tunable of a session. The defaults reproduce
//! the classic game: target 24, a win when the result is within `1e-4` of it,
//! ten points per win, the next hand two seconds after a win and messages that
//! disappear after three seconds.

use std::time::Duration;
use thiserror::Error;
use twentyfour_deck::{DealerConfig, Hand, HandError, ScreenStrategy};

/// Value every expression has to reach.
pub const DEFAULT_TARGET: f64 = 24.0;

/// Largest distance from the target still counted as a win.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

pub const DEFAULT_POINTS_PER_WIN: u32 = 10;

/// Delay between a win and the next deal.
pub const DEFAULT_NEXT_ROUND_DELAY: Duration = Duration::from_millis(2000);

/// How long a message stays visible.
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_millis(3000);

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The target is NaN or infinite.
    #[error("target must be a finite number, got {0}")]
    Target(f64),

    /// The win tolerance is not a positive finite number.
    #[error("tolerance must be positive, got {0}")]
    Tolerance(f64),

    /// A delay that has to be positive is zero.
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),

    /// The dealer would never draw a hand.
    #[error("the dealer needs at least one attempt")]
    ZeroAttempts,

    /// The fallback hand is not a valid hand.
    #[error("invalid fallback hand: {0}")]
    Fallback(#[from] HandError),
}

/// Settings for a [`Game`](crate::Game).
///
/// ```rust
/// # use twentyfour::GameConfig;
/// let mut config = GameConfig::default();
/// config.tolerance = 0.0;
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub target: f64,
    pub tolerance: f64,
    pub points_per_win: u32,
    pub next_round_delay: Duration,
    pub message_ttl: Duration,
    pub dealer: DealerConfig,
    /// Seed for a reproducible sequence of hands. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            tolerance: DEFAULT_TOLERANCE,
            points_per_win: DEFAULT_POINTS_PER_WIN,
            next_round_delay: DEFAULT_NEXT_ROUND_DELAY,
            message_ttl: DEFAULT_MESSAGE_TTL,
            dealer: DealerConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Checks every field.
    ///
    /// # Errors
    /// The first invalid field, as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target.is_finite() {
            return Err(ConfigError::Target(self.target));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::Tolerance(self.tolerance));
        }
        if self.next_round_delay.is_zero() {
            return Err(ConfigError::ZeroDelay("next round delay"));
        }
        if self.message_ttl.is_zero() {
            return Err(ConfigError::ZeroDelay("message duration"));
        }
        if self.dealer.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }

    /// Replaces the fallback hand with one built from `faces`.
    ///
    /// # Errors
    /// [`ConfigError::Fallback`] when `faces` is not four values in `1..=13`.
    pub fn with_fallback(mut self, faces: &[u8]) -> Result<Self, ConfigError> {
        self.dealer.fallback = Hand::try_from_slice(faces)?;
        Ok(self)
    }

    pub fn with_strategy(mut self, strategy: ScreenStrategy) -> Self {
        self.dealer.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns `true` when `value` counts as reaching the target.
    #[inline]
    pub fn is_win(&self, value: f64) -> bool {
        (value - self.target).abs() < self.tolerance
    }
}
