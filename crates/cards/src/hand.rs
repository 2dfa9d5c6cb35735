// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! A growing set of cards.
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

use crate::Card;

/// A set of any number of unique cards.
///
/// Backed by an ordered set so duplicates are impossible and iteration is
/// always rank then suit ascending. The evaluator relies on this order
/// whenever any card of a rank would do: it picks the lowest suit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: BTreeSet<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card, returns false if the card was already in the hand.
    pub fn add(&mut self, card: Card) -> bool {
        self.cards.insert(card)
    }

    /// Removes a card, returns false if the card was not in the hand.
    pub fn remove(&mut self, card: &Card) -> bool {
        self.cards.remove(card)
    }

    /// Keeps only the cards matching the predicate.
    pub fn retain(&mut self, f: impl FnMut(&Card) -> bool) {
        self.cards.retain(f);
    }

    /// Checks if the hand holds the card.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if this hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the cards in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// The cards sorted ascending.
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for card in &self.cards {
            write!(f, "{sep}{card}")?;
            sep = " ";
        }
        Ok(())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}
