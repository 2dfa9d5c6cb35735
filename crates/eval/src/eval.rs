// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and comparison.
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use filterpoker_cards::{Hand, Rank, Suit};

/// The poker hand categories.
///
/// Lower discriminants are stronger hands, use [HandRank::beats] to compare
/// strength rather than the raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// Five consecutive ranks in one suit.
    StraightFlush = 1,
    /// Four cards of one rank.
    FourKind,
    /// Three cards of one rank plus a pair.
    FullHouse,
    /// Five cards of one suit.
    Flush,
    /// Five consecutive ranks.
    Straight,
    /// Three cards of one rank.
    ThreeKind,
    /// Two pairs.
    TwoPair,
    /// One pair.
    OnePair,
    /// The highest single card.
    HighCard,
}

impl HandRank {
    /// Checks if this category is strictly stronger than `other`.
    pub fn beats(&self, other: &HandRank) -> bool {
        (*self as u8) < (*other as u8)
    }

    /// The display label of this category.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::StraightFlush => "straight-flush",
            HandRank::FourKind => "4 of a kind",
            HandRank::FullHouse => "full-house",
            HandRank::Flush => "flush",
            HandRank::Straight => "straight",
            HandRank::ThreeKind => "3 of a kind",
            HandRank::TwoPair => "2 pair",
            HandRank::OnePair => "pair",
            HandRank::HighCard => "high card",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The best hand found in a set of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// The hand category.
    pub rank: HandRank,
    /// The exact cards realizing the category.
    pub cards: Hand,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank, self.cards)
    }
}

/// Returns the best poker hand in a set of cards.
///
/// Returns `None` only for an empty set. Categories that exist with fewer
/// than five cards return just the cards of the rank group, a bare pair
/// scores as [HandRank::OnePair] with two cards; flushes and straights always
/// return five cards.
pub fn evaluate(hand: &Hand) -> Option<Score> {
    if hand.is_empty() {
        return None;
    }

    // Strongest first, the first detector that fires wins.
    let detectors: [(HandRank, fn(&Hand) -> Option<Hand>); 9] = [
        (HandRank::StraightFlush, straight_flush),
        (HandRank::FourKind, four_kind),
        (HandRank::FullHouse, full_house),
        (HandRank::Flush, flush),
        (HandRank::Straight, straight),
        (HandRank::ThreeKind, three_kind),
        (HandRank::TwoPair, two_pair),
        (HandRank::OnePair, one_pair),
        (HandRank::HighCard, high_card),
    ];

    for (rank, detect) in detectors {
        if let Some(cards) = detect(hand) {
            return Some(Score { rank, cards });
        }
    }

    // Unreachable for cards drawn from a single deck: any non-empty hand
    // with at most four cards per rank matches one of the nine detectors.
    log::error!("no category matched hand {hand}, the deck holds duplicate cards");
    None
}

/// Compares two non-empty sets of cards.
///
/// Returns `Greater` if the first hand is stronger, `Less` if the second is,
/// and `Equal` on a tie. The stronger category always wins; on equal
/// categories the winning cards are compared by rank from the top down,
/// except for full houses which compare by the triple rank alone. Suits
/// never break ties.
///
/// Panics if either hand is empty.
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    assert!(
        !a.is_empty() && !b.is_empty(),
        "compare requires non-empty hands"
    );

    let (sa, sb) = match (evaluate(a), evaluate(b)) {
        (Some(sa), Some(sb)) => (sa, sb),
        _ => panic!("hand evaluation failed on a non-empty hand"),
    };

    if sa.rank != sb.rank {
        return if sa.rank.beats(&sb.rank) {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    match sa.rank {
        HandRank::FullHouse => {
            let ra = triple_rank(&sa.cards);
            let rb = triple_rank(&sb.cards);
            match ra.cmp(&rb) {
                // Equal triples means more than four cards of one rank
                // between the two hands.
                Ordering::Equal => panic!("full houses share the triple rank {ra:?}"),
                ord => ord,
            }
        }
        _ => compare_kickers(&sa.cards, &sb.cards),
    }
}

/// Number of cards of each rank.
fn rank_counts(hand: &Hand) -> AHashMap<Rank, usize> {
    let mut counts = AHashMap::new();
    for card in hand.iter() {
        *counts.entry(card.rank()).or_insert(0usize) += 1;
    }
    counts
}

/// Number of cards of each suit.
fn suit_counts(hand: &Hand) -> AHashMap<Suit, usize> {
    let mut counts = AHashMap::new();
    for card in hand.iter() {
        *counts.entry(card.suit()).or_insert(0usize) += 1;
    }
    counts
}

/// Compares winning cards by rank from the top down, first mismatch decides.
fn compare_kickers(a: &Hand, b: &Hand) -> Ordering {
    for (ca, cb) in a.iter().rev().zip(b.iter().rev()) {
        match ca.rank().cmp(&cb.rank()) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// The most frequent rank among a full house's winning cards.
fn triple_rank(cards: &Hand) -> Rank {
    rank_counts(cards)
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(rank, _)| rank)
        .expect("full house with no cards")
}

fn straight_flush(hand: &Hand) -> Option<Hand> {
    let counts = suit_counts(hand);

    // Run the straight scan on each suit with enough cards, keep the
    // strongest straight found.
    let mut best: Option<Hand> = None;
    for suit in Suit::suits() {
        if counts.get(&suit).copied().unwrap_or(0) < 5 {
            continue;
        }

        let suited = hand.iter().filter(|c| c.suit() == suit).collect::<Hand>();
        if let Some(cards) = straight(&suited) {
            best = match best {
                Some(b) if compare_kickers(&b, &cards) != Ordering::Less => Some(b),
                _ => Some(cards),
            };
        }
    }

    best
}

fn four_kind(hand: &Hand) -> Option<Hand> {
    let counts = rank_counts(hand);
    let rank = counts
        .iter()
        .filter(|&(_, &count)| count == 4)
        .map(|(&rank, _)| rank)
        .max()?;

    Some(hand.iter().filter(|c| c.rank() == rank).collect())
}

fn full_house(hand: &Hand) -> Option<Hand> {
    let counts = rank_counts(hand);

    let triple = counts
        .iter()
        .filter(|&(_, &count)| count == 3)
        .map(|(&rank, _)| rank)
        .max()?;

    // The pair comes from the best remaining rank held two or three times.
    let pair = counts
        .iter()
        .filter(|&(&rank, &count)| rank != triple && (count == 2 || count == 3))
        .map(|(&rank, _)| rank)
        .max()?;

    let mut cards = hand
        .iter()
        .filter(|c| c.rank() == triple)
        .collect::<Hand>();
    cards.extend(hand.iter().filter(|c| c.rank() == pair).take(2));
    Some(cards)
}

fn flush(hand: &Hand) -> Option<Hand> {
    let counts = suit_counts(hand);

    // Of the qualifying suits keep the one with the best top card.
    let best = hand.iter().filter(|c| counts[&c.suit()] >= 5).max()?;

    let mut cards = hand
        .iter()
        .filter(|c| c.suit() == best.suit())
        .collect::<Vec<_>>();
    cards.reverse();
    Some(cards.into_iter().take(5).collect())
}

fn straight(hand: &Hand) -> Option<Hand> {
    let present = hand
        .iter()
        .map(|c| c.rank().value())
        .collect::<AHashSet<_>>();

    // Scan for the highest five rank window with no gaps.
    let mut top = Rank::Ace.value();
    while top >= 5 {
        match (top - 4..=top).rev().find(|v| !present.contains(v)) {
            // Resume the scan just below the gap.
            Some(gap) => top = gap - 1,
            None => {
                let cards = (top - 4..=top)
                    .filter_map(|v| {
                        let rank = Rank::from_value(v)?;
                        hand.iter().find(|c| c.rank() == rank)
                    })
                    .collect::<Hand>();
                return Some(cards);
            }
        }
    }

    None
}

fn three_kind(hand: &Hand) -> Option<Hand> {
    let counts = rank_counts(hand);
    let rank = counts
        .iter()
        .filter(|&(_, &count)| count == 3)
        .map(|(&rank, _)| rank)
        .max()?;

    Some(hand.iter().filter(|c| c.rank() == rank).collect())
}

fn two_pair(hand: &Hand) -> Option<Hand> {
    let counts = rank_counts(hand);
    let mut ranks = counts
        .iter()
        .filter(|&(_, &count)| count == 2)
        .map(|(&rank, _)| rank)
        .collect::<Vec<_>>();
    if ranks.len() < 2 {
        return None;
    }

    ranks.sort_unstable();
    let top = &ranks[ranks.len() - 2..];
    Some(hand.iter().filter(|c| top.contains(&c.rank())).collect())
}

fn one_pair(hand: &Hand) -> Option<Hand> {
    let counts = rank_counts(hand);
    let mut pairs = counts
        .iter()
        .filter(|&(_, &count)| count == 2)
        .map(|(&rank, _)| rank);

    // Two or more pairs were already caught by the two pair detector.
    let rank = pairs.next()?;
    if pairs.next().is_some() {
        return None;
    }

    Some(hand.iter().filter(|c| c.rank() == rank).collect())
}

fn high_card(hand: &Hand) -> Option<Hand> {
    let counts = rank_counts(hand);
    let rank = counts
        .iter()
        .filter(|&(_, &count)| count == 1)
        .map(|(&rank, _)| rank)
        .max()?;

    let card = hand.iter().rev().find(|c| c.rank() == rank)?;
    Some([card].into_iter().collect())
}
