// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! The filter selection grid.
use filterpoker_cards::{Card, Hand, Rank, Suit};

/// A cursor movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Move the cursor up.
    Up,
    /// Move the cursor down.
    Down,
    /// Move the cursor left.
    Left,
    /// Move the cursor right.
    Right,
}

/// The card selection grid.
///
/// A 5x14 matrix: a header row with the thirteen rank symbols, a leftmost
/// column with the four suit glyphs, and one cell per card. The header cells
/// toggle a whole rank or suit at once, skipping cards already dealt out.
#[derive(Debug)]
pub struct Grid {
    selected: Hand,
    row: usize,
    col: usize,
}

impl Grid {
    /// Number of rows, the rank header plus one row per suit.
    pub const ROWS: usize = 5;
    /// Number of columns, the suit column plus one column per rank.
    pub const COLS: usize = 14;

    /// Creates a grid with nothing selected and the cursor on the first card.
    pub fn new() -> Self {
        Self {
            selected: Hand::new(),
            row: 1,
            col: 1,
        }
    }

    /// The cursor position as (row, col).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// The card at a cell, `None` on the header row and suit column.
    pub fn card_at(row: usize, col: usize) -> Option<Card> {
        if !(1..Self::ROWS).contains(&row) || !(1..Self::COLS).contains(&col) {
            return None;
        }

        let suit = Suit::suits().nth(row - 1)?;
        let rank = Rank::from_value(col as u8)?;
        Some(Card::new(rank, suit))
    }

    /// Moves the cursor, clamped to the grid.
    ///
    /// The header row and suit column are reachable for the group toggles,
    /// but the empty top left corner is not.
    pub fn move_cursor(&mut self, m: Move) {
        match m {
            Move::Up => {
                if self.row > 1 || (self.row == 1 && self.col > 0) {
                    self.row -= 1;
                }
            }
            Move::Down => {
                if self.row < Self::ROWS - 1 {
                    self.row += 1;
                }
            }
            Move::Left => {
                if self.col > 1 || (self.col == 1 && self.row > 0) {
                    self.col -= 1;
                }
            }
            Move::Right => {
                if self.col < Self::COLS - 1 {
                    self.col += 1;
                }
            }
        }
    }

    /// Toggles the selection under the cursor.
    ///
    /// On a card cell the card selection is flipped if it has not been dealt
    /// out yet. On a rank or suit header the whole group toggles: if any
    /// available card of the group is unselected they all get selected,
    /// otherwise they all get deselected.
    pub fn toggle(&mut self, taken: &Hand) {
        match (self.row, self.col) {
            (0, col) if col > 0 => {
                let cards = (1..Self::ROWS).filter_map(|row| Self::card_at(row, col));
                self.toggle_group(cards, taken);
            }
            (row, 0) if row > 0 => {
                let cards = (1..Self::COLS).filter_map(|col| Self::card_at(row, col));
                self.toggle_group(cards, taken);
            }
            (row, col) => {
                if let Some(card) = Self::card_at(row, col) {
                    if !taken.contains(&card) && !self.selected.add(card) {
                        self.selected.remove(&card);
                    }
                }
            }
        }
    }

    fn toggle_group(&mut self, cards: impl Iterator<Item = Card>, taken: &Hand) {
        let available = cards.filter(|c| !taken.contains(c)).collect::<Vec<_>>();
        let select = available.iter().any(|c| !self.selected.contains(c));

        if select {
            self.selected.extend(available);
        } else {
            self.selected.retain(|c| !available.contains(c));
        }
    }

    /// Deselects cards that have been dealt out since the last round.
    pub fn prune(&mut self, taken: &Hand) {
        self.selected.retain(|c| !taken.contains(c));
    }

    /// Resets the cursor to the first card.
    pub fn reset_cursor(&mut self) {
        self.row = 1;
        self.col = 1;
    }

    /// Checks if a card is selected.
    pub fn is_selected(&self, card: &Card) -> bool {
        self.selected.contains(card)
    }

    /// Checks if at least one card is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The selected cards.
    pub fn selection(&self) -> Hand {
        self.selected.clone()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn card_cells() {
        assert_eq!(Grid::card_at(1, 1), Some(card(Rank::Deuce, Suit::Hearts)));
        assert_eq!(Grid::card_at(4, 13), Some(card(Rank::Ace, Suit::Spades)));
        assert_eq!(Grid::card_at(0, 3), None);
        assert_eq!(Grid::card_at(2, 0), None);
        assert_eq!(Grid::card_at(5, 1), None);
    }

    #[test]
    fn toggle_card() {
        let mut grid = Grid::new();
        let taken = Hand::new();
        let c = card(Rank::Deuce, Suit::Hearts);

        assert_eq!(grid.cursor(), (1, 1));
        grid.toggle(&taken);
        assert!(grid.is_selected(&c));

        grid.toggle(&taken);
        assert!(!grid.is_selected(&c));
        assert!(!grid.has_selection());
    }

    #[test]
    fn toggle_taken_card_is_ignored() {
        let mut grid = Grid::new();
        let c = card(Rank::Deuce, Suit::Hearts);
        let taken = [c].into_iter().collect::<Hand>();

        grid.toggle(&taken);
        assert!(!grid.is_selected(&c));
    }

    #[test]
    fn rank_header_toggles_column() {
        let mut grid = Grid::new();
        let taken = [card(Rank::Deuce, Suit::Clubs)].into_iter().collect::<Hand>();

        // Move to the deuce header cell.
        grid.move_cursor(Move::Up);
        assert_eq!(grid.cursor(), (0, 1));

        // Selects the three available deuces.
        grid.toggle(&taken);
        assert_eq!(grid.selection().len(), 3);
        assert!(!grid.is_selected(&card(Rank::Deuce, Suit::Clubs)));

        // All available selected, the next toggle deselects them.
        grid.toggle(&taken);
        assert!(!grid.has_selection());
    }

    #[test]
    fn rank_header_completes_partial_selection() {
        let mut grid = Grid::new();
        let taken = Hand::new();

        // Select the deuce of hearts by hand.
        grid.toggle(&taken);

        // The header first completes the rank, then clears it.
        grid.move_cursor(Move::Up);
        grid.toggle(&taken);
        assert_eq!(grid.selection().len(), 4);

        grid.toggle(&taken);
        assert!(!grid.has_selection());
    }

    #[test]
    fn suit_header_toggles_row() {
        let mut grid = Grid::new();
        let taken = Hand::new();

        grid.move_cursor(Move::Left);
        assert_eq!(grid.cursor(), (1, 0));

        grid.toggle(&taken);
        assert_eq!(grid.selection().len(), 13);
        assert!(grid.selection().iter().all(|c| c.suit() == Suit::Hearts));

        grid.toggle(&taken);
        assert!(!grid.has_selection());
    }

    #[test]
    fn prune_drops_dealt_cards() {
        let mut grid = Grid::new();
        let taken = Hand::new();

        grid.move_cursor(Move::Left);
        grid.toggle(&taken);
        assert_eq!(grid.selection().len(), 13);

        let dealt = [card(Rank::Deuce, Suit::Hearts), card(Rank::Ace, Suit::Hearts)]
            .into_iter()
            .collect::<Hand>();
        grid.prune(&dealt);
        assert_eq!(grid.selection().len(), 11);
    }

    #[test]
    fn cursor_clamps_to_grid() {
        let mut grid = Grid::new();

        // The top left corner is not reachable.
        grid.move_cursor(Move::Up);
        grid.move_cursor(Move::Left);
        assert_eq!(grid.cursor(), (0, 1));
        grid.move_cursor(Move::Up);
        assert_eq!(grid.cursor(), (0, 1));

        grid.move_cursor(Move::Down);
        grid.move_cursor(Move::Left);
        grid.move_cursor(Move::Left);
        assert_eq!(grid.cursor(), (1, 0));

        for _ in 0..20 {
            grid.move_cursor(Move::Down);
            grid.move_cursor(Move::Right);
        }
        assert_eq!(grid.cursor(), (Grid::ROWS - 1, Grid::COLS - 1));
    }
}
