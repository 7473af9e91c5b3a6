//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Card hands for the 24-point game.
//!
//! This crate owns everything about the four cards of a round:
//!
//! - [`card`]: the [`Card`] and [`Hand`] data model,
//! - [`exclusion`]: the curated table of multisets known to have no solution,
//! - [`solver`]: an exhaustive search deciding solvability exactly,
//! - [`dealer`]: rejection-sampling generation of likely-solvable hands.
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use twentyfour_deck::{Dealer, DealerConfig, ScreenStrategy, solver};
//!
//! let dealer = Dealer::new(DealerConfig {
//!     strategy: ScreenStrategy::Exhaustive,
//!     ..DealerConfig::default()
//! });
//! let hand = dealer.deal_with(&mut StdRng::seed_from_u64(3));
//! assert!(solver::solvable(hand.faces()));
//! ```

pub mod card;
pub mod dealer;
pub mod exclusion;
pub mod solver;

pub use card::{Card, HAND_SIZE, Hand, HandError, MAX_FACE, MIN_FACE};
pub use dealer::{Dealer, DealerConfig, ScreenStrategy};
