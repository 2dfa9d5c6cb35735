// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! Game state and the game loop.
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use std::{cmp::Ordering, thread, time::Duration};

use filterpoker_cards::{Card, Deck, DeckError, Hand};
use filterpoker_eval::compare;

use crate::{
    grid::{Grid, Move},
    terminal::Screen,
};

/// The game phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player builds the card filter.
    Filtering,
    /// Cards are drawn until one matches the filter.
    Drawing,
    /// The dealer is dealt up to its minimum hand size.
    Finishing,
}

/// The whole game state.
#[derive(Debug)]
pub struct Game {
    /// The shuffled deck.
    pub deck: Deck,
    /// The player cards caught by the filter.
    pub player: Hand,
    /// The dealer cards.
    pub dealer: Hand,
    /// The standing filter for the current round.
    pub filter: Hand,
    /// The draw trail of the current round.
    pub drawn: Vec<Card>,
    /// The filter selection grid.
    pub grid: Grid,
    /// The current phase.
    pub phase: Phase,
    /// The game over message.
    pub message: Option<&'static str>,
}

impl Game {
    /// The player hand size that ends the game.
    pub const PLAYER_TARGET: usize = 5;
    /// The minimum dealer hand size at showdown.
    pub const DEALER_TARGET: usize = 8;

    /// Creates a game with a freshly shuffled deck.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            deck: Deck::new_and_shuffled(rng),
            player: Hand::new(),
            dealer: Hand::new(),
            filter: Hand::new(),
            drawn: Vec::new(),
            grid: Grid::new(),
            phase: Phase::Filtering,
            message: None,
        }
    }

    /// All cards dealt out so far.
    pub fn taken(&self) -> Hand {
        self.player.iter().chain(self.dealer.iter()).collect()
    }

    /// Draws one card and routes it, returns true if the player caught it.
    ///
    /// A card matching the filter goes to the player and ends the drawing
    /// phase, anything else goes to the dealer.
    pub fn draw_step(&mut self) -> Result<bool, DeckError> {
        let card = self.deck.draw()?;
        self.drawn.push(card);

        if self.filter.contains(&card) {
            self.player.add(card);
            Ok(true)
        } else {
            self.dealer.add(card);
            Ok(false)
        }
    }

    /// Deals one more card to the dealer during the finishing phase.
    pub fn finish_step(&mut self) -> Result<(), DeckError> {
        let card = self.deck.draw()?;
        self.drawn.push(card);
        self.dealer.add(card);
        Ok(())
    }

    /// Checks if the player hand is complete.
    pub fn player_done(&self) -> bool {
        self.player.len() >= Self::PLAYER_TARGET
    }

    /// Decides the game, the dealer wins ties regardless of suits.
    pub fn player_won(&self) -> bool {
        compare(&self.player, &self.dealer) == Ordering::Greater
    }
}

/// Runs the game until a win, loss, or quit.
pub fn run(mut game: Game, delay: Duration) -> Result<()> {
    let mut screen = Screen::new()?;

    loop {
        // Build the filter.
        game.phase = Phase::Filtering;
        let taken = game.taken();
        game.grid.prune(&taken);
        game.grid.reset_cursor();
        screen.flush_input()?;
        screen.render(&game)?;

        loop {
            let key = screen.next_key()?;
            if is_quit(&key) {
                return Ok(());
            }

            match key.code {
                KeyCode::Up => game.grid.move_cursor(Move::Up),
                KeyCode::Down => game.grid.move_cursor(Move::Down),
                KeyCode::Left => game.grid.move_cursor(Move::Left),
                KeyCode::Right => game.grid.move_cursor(Move::Right),
                KeyCode::Char(' ') => game.grid.toggle(&taken),
                KeyCode::Enter if game.grid.has_selection() => {
                    game.filter = game.grid.selection();
                    break;
                }
                _ => {}
            }

            screen.render(&game)?;
        }

        // Draw until a card matches the filter or the deck runs out.
        game.phase = Phase::Drawing;
        game.drawn.clear();
        screen.render(&game)?;

        loop {
            let caught = game.draw_step()?;
            screen.render(&game)?;
            if caught || game.deck.is_empty() {
                break;
            }
            thread::sleep(delay);
        }

        if game.player_done() {
            // Top the dealer up to its minimum hand before the showdown.
            if game.dealer.len() < Game::DEALER_TARGET {
                game.phase = Phase::Finishing;
                screen.render(&game)?;
                while game.dealer.len() < Game::DEALER_TARGET {
                    thread::sleep(delay);
                    game.finish_step()?;
                    screen.render(&game)?;
                }
            }

            game.message = Some(if game.player_won() {
                "YOU WIN"
            } else {
                "YOU LOSE"
            });
            break;
        }

        if game.deck.is_empty() {
            // The dealer got the rest of the deck.
            game.message = Some("YOU LOSE");
            break;
        }
    }

    // Keep the final board up until a key is pressed.
    screen.render(&game)?;
    screen.flush_input()?;
    screen.next_key()?;

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
