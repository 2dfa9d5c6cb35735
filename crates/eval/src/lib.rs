// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! Filter Poker hand evaluator.
//!
//! This crate classifies the best poker hand present in an arbitrary set of
//! cards. Hands grow one card at a time during a game so the evaluator
//! accepts any number of cards from a bare pair up to the thirteen a dealer
//! can pile up, not just complete five card hands.
//!
//! [evaluate] returns the best category together with the exact cards that
//! form it:
//!
//! ```
//! # use filterpoker_cards::{Card, Hand, Rank, Suit};
//! # use filterpoker_eval::{evaluate, HandRank};
//! let hand = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Ace, Suit::Spades),
//! ]
//! .into_iter()
//! .collect::<Hand>();
//!
//! let score = evaluate(&hand).unwrap();
//! assert_eq!(score.rank, HandRank::OnePair);
//! ```
//!
//! and [compare] orders two hands by category and kickers.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod eval;
pub use eval::{HandRank, Score, compare, evaluate};
