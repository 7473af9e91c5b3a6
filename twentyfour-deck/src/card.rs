//! # Cards and hands
//!
//! A round of the 24-point game is played with exactly four cards drawn
//! together. Each [`Card`] remembers the slot it was dealt into so that the
//! expression editor can track which cards have been consumed, even when two
//! cards share the same face value.
//!
//! A [`Hand`] is the immutable set of four cards for one round.

use std::fmt;
use thiserror::Error;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 4;

/// Smallest card face value (ace).
pub const MIN_FACE: u8 = 1;

/// Largest card face value (king).
pub const MAX_FACE: u8 = 13;

/// Errors raised when building a [`Hand`] from raw face values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A face value was outside `1..=13`.
    #[error("card face {face} at slot {slot} is outside 1..=13")]
    FaceOutOfRange {
        /// Slot holding the offending value.
        slot: usize,
        /// The rejected face value.
        face: u8,
    },

    /// The input did not contain exactly four values.
    #[error("a hand needs exactly 4 cards, got {0}")]
    WrongSize(usize),
}

/// A single dealt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Face value in `1..=13`.
    pub face: u8,
    /// Position of the card in its hand, `0..4`.
    pub slot: usize,
}

/// Four cards dealt for one round.
///
/// Hands are built either by the dealer or from explicit face values with
/// [`Hand::try_from_faces`].
///
/// ```rust
/// # use twentyfour_deck::Hand;
/// let hand = Hand::try_from_faces([8, 3, 8, 3]).unwrap();
/// assert_eq!(hand.card(1).unwrap().face, 3);
/// assert_eq!(hand.sorted_faces(), [3, 3, 8, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Builds a hand from four face values, assigning slots in order.
    pub fn try_from_faces(faces: [u8; HAND_SIZE]) -> Result<Self, HandError> {
        for (slot, &face) in faces.iter().enumerate() {
            if !(MIN_FACE..=MAX_FACE).contains(&face) {
                return Err(HandError::FaceOutOfRange { slot, face });
            }
        }
        Ok(Self::from_faces_unchecked(faces))
    }

    /// Builds a hand from a slice, which must hold exactly four values.
    pub fn try_from_slice(faces: &[u8]) -> Result<Self, HandError> {
        let faces: [u8; HAND_SIZE] = faces
            .try_into()
            .map_err(|_| HandError::WrongSize(faces.len()))?;
        Self::try_from_faces(faces)
    }

    pub(crate) fn from_faces_unchecked(faces: [u8; HAND_SIZE]) -> Self {
        let mut slot = 0;
        let cards = faces.map(|face| {
            let card = Card { face, slot };
            slot += 1;
            card
        });
        Self { cards }
    }

    /// Returns the card dealt into `slot`, if the slot exists.
    pub fn card(&self, slot: usize) -> Option<Card> {
        self.cards.get(slot).copied()
    }

    /// All four cards in slot order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Face values in slot order.
    pub fn faces(&self) -> [u8; HAND_SIZE] {
        self.cards.map(|c| c.face)
    }

    /// Face values sorted ascending; the multiset key used by the exclusion table.
    pub fn sorted_faces(&self) -> [u8; HAND_SIZE] {
        let mut faces = self.faces();
        faces.sort_unstable();
        faces
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.faces();
        write!(f, "[{a} {b} {c} {d}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_input_order() {
        let hand = Hand::try_from_faces([13, 1, 7, 1]).unwrap();
        for (i, card) in hand.cards().iter().enumerate() {
            assert_eq!(card.slot, i);
        }
        assert_eq!(hand.faces(), [13, 1, 7, 1]);
        assert_eq!(hand.sorted_faces(), [1, 1, 7, 13]);
    }

    #[test]
    fn rejects_out_of_range_faces() {
        assert_eq!(
            Hand::try_from_faces([1, 0, 3, 4]),
            Err(HandError::FaceOutOfRange { slot: 1, face: 0 })
        );
        assert_eq!(
            Hand::try_from_faces([1, 2, 3, 14]),
            Err(HandError::FaceOutOfRange { slot: 3, face: 14 })
        );
    }

    #[test]
    fn slice_must_have_four_values() {
        assert_eq!(Hand::try_from_slice(&[1, 2, 3]), Err(HandError::WrongSize(3)));
        assert!(Hand::try_from_slice(&[1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn missing_slot_is_none() {
        let hand = Hand::try_from_faces([1, 2, 3, 4]).unwrap();
        assert!(hand.card(4).is_none());
        assert_eq!(hand.to_string(), "[1 2 3 4]");
    }
}
