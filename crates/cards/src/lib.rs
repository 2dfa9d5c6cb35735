// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! Filter Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use filterpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah > kd);
//! ```
//!
//! a [Deck] type for shuffling and drawing cards:
//!
//! ```
//! # use filterpoker_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.draw().unwrap();
//! assert_eq!(deck.remaining(), Deck::SIZE - 1);
//! ```
//!
//! and a [Hand] type, an unordered set of unique cards that grows one card at
//! a time as the game deals them out.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod deck;
pub use deck::{Card, Deck, DeckError, Rank, Suit};

mod hand;
pub use hand::Hand;
