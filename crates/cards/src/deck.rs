// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Card rank.
///
/// Rank values run from 1 (the deuce) to 13 (the ace): there is no ace-low
/// alias, so the ace only sits at the top of a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 1,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from lowest to highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 1 for the deuce up to 13 for the ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The rank with the given value, if it is in the 1..=13 range.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits carry no strength, the ordering is only used as a deterministic
/// tie-break when any card of a rank would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 1,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        };

        write!(f, "{suit}")
    }
}

/// A playing card.
///
/// Cards are ordered by rank first and suit second, so the derived order
/// matches the evaluator's tie-break rules.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Deck errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left to draw.
    #[error("the deck is exhausted")]
    Exhausted,
}

/// A cards deck.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Draws the top card from the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Draws `n` cards in draw order.
    ///
    /// Fails without drawing any card if fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if self.remaining() < n {
            return Err(DeckError::Exhausted);
        }

        let mut drawn = self.cards.split_off(self.cards.len() - n);
        drawn.reverse();
        Ok(drawn)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of undrawn cards.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    #[test]
    fn deck_has_52_unique_cards() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.remaining(), Deck::SIZE);

        let mut cards = AHashSet::default();
        while !deck.is_empty() {
            cards.insert(deck.draw().unwrap());
        }

        assert_eq!(cards.len(), Deck::SIZE);
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                assert!(cards.contains(&Card::new(rank, suit)));
            }
        }
    }

    #[test]
    fn draw_counts_down_remaining() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        let mut drawn = Vec::new();
        for k in 1..=Deck::SIZE {
            drawn.push(deck.draw().unwrap());
            assert_eq!(deck.remaining(), Deck::SIZE - k);
        }

        assert_eq!(deck.draw(), Err(DeckError::Exhausted));

        // Drawn cards reconstruct the full deck.
        let unique = drawn.iter().collect::<AHashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn draw_n_is_atomic() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        let cards = deck.draw_n(5).unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(deck.remaining(), Deck::SIZE - 5);

        // A failed multi-draw leaves the deck untouched.
        assert_eq!(deck.draw_n(Deck::SIZE), Err(DeckError::Exhausted));
        assert_eq!(deck.remaining(), Deck::SIZE - 5);
    }

    #[test]
    fn draw_n_matches_single_draws() {
        let mut d1 = Deck::default();
        let mut d2 = Deck::default();

        let cards = d1.draw_n(3).unwrap();
        for card in cards {
            assert_eq!(card, d2.draw().unwrap());
        }
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "A♥");

        let c = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!(c.to_string(), "10♣");

        let c = Card::new(Rank::Deuce, Suit::Spades);
        assert_eq!(c.to_string(), "2♠");

        let c = Card::new(Rank::Queen, Suit::Diamonds);
        assert_eq!(c.to_string(), "Q♦");
    }

    #[test]
    fn card_ordering() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let kd = Card::new(Rank::King, Suit::Diamonds);

        // Rank first, suit breaks rank ties.
        assert!(ah > kd);
        assert!(as_ > ah);
        assert_eq!(ah.cmp(&ah), std::cmp::Ordering::Equal);
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 1);
        assert_eq!(Rank::Ten.value(), 9);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Ace.value(), 13);
        assert_eq!(Rank::from_value(13), Some(Rank::Ace));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }
}
