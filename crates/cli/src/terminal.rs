// Copyright (C) 2025 Filter Poker developers.
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Print, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::{
    io::{self, Write},
    time::Duration,
};

use filterpoker_cards::{Card, Hand, Rank, Suit};
use filterpoker_eval::evaluate;

use crate::{
    game::{Game, Phase},
    grid::Grid,
};

const TITLE: &str = "\
FILTER POKER is a solitaire poker variant.

Select which cards should be filtered to your hand if drawn.
Everything else goes to the dealer. The game is over once you
have 5 cards and the dealer has at least 8.

Whoever has the best 5-card poker hand by rank wins. The dealer
wins in the case of equal ranks regardless of the suits.

To create your filter, either select cards individually or by
rank or suit using the top row and leftmost column.
";

/// The game screen.
///
/// Owns the raw mode terminal, dropping it restores the terminal even when
/// the game loop bails out with an error.
pub struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    /// Takes over the terminal.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, cursor::Hide)?;
        Ok(Self { stdout })
    }

    /// Blocks until the next key press.
    pub fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    /// Drops pending input, keys pressed while cards were being drawn must
    /// not leak into the next filtering phase.
    pub fn flush_input(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }

    /// Redraws the whole game view.
    pub fn render(&mut self, game: &Game) -> Result<()> {
        let mut lines = Vec::new();

        if game.phase == Phase::Filtering && game.drawn.is_empty() {
            render_title(&mut lines);
        } else {
            render_draw(&mut lines, &game.drawn);
        }

        render_instructions(&mut lines, game.phase);
        render_hands(&mut lines, &game.player, &game.dealer);
        render_grid(&mut lines, game);
        render_score(&mut lines, &game.player, &game.dealer);

        if let Some(message) = game.message {
            lines.push(String::new());
            lines.push(message.to_string());
        }

        queue!(self.stdout, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        self.stdout.flush()?;

        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show
        );
        let _ = disable_raw_mode();
    }
}

fn render_title(lines: &mut Vec<String>) {
    lines.extend(TITLE.lines().map(str::to_string));
}

fn render_draw(lines: &mut Vec<String>, drawn: &[Card]) {
    lines.push("Draw:".to_string());
    for card in drawn.iter().rev() {
        lines.push(card.to_string());
    }
    lines.push(String::new());
}

fn render_instructions(lines: &mut Vec<String>, phase: Phase) {
    match phase {
        Phase::Filtering => {
            lines.push("-------------------------".to_string());
            lines.push("ARROW KEYS to move cursor".to_string());
            lines.push("SPACE to select".to_string());
            lines.push("ENTER to start drawing".to_string());
            lines.push("-------------------------".to_string());
        }
        Phase::Drawing => {
            lines.push("-----------------------".to_string());
            lines.push("Drawing cards until one".to_string());
            lines.push("matches the filter...".to_string());
            lines.push("-----------------------".to_string());
        }
        Phase::Finishing => {
            lines.push("--------------------------".to_string());
            lines.push("Drawing cards until dealer".to_string());
            lines.push(format!("has {}...", Game::DEALER_TARGET));
            lines.push("--------------------------".to_string());
        }
    }
    lines.push(String::new());
}

fn render_hands(lines: &mut Vec<String>, player: &Hand, dealer: &Hand) {
    lines.push(format!("Player: {player}"));
    lines.push(format!("Dealer: {dealer}"));
    lines.push(String::new());
}

fn render_grid(lines: &mut Vec<String>, game: &Game) {
    lines.push("Filter:".to_string());
    for row in 0..Grid::ROWS {
        let mut line = String::new();
        for col in 0..Grid::COLS {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&cell(game, row, col));
        }
        lines.push(line);
    }
}

fn render_score(lines: &mut Vec<String>, player: &Hand, dealer: &Hand) {
    let text = |hand: &Hand| match evaluate(hand) {
        Some(score) => score.to_string(),
        None => "nothing".to_string(),
    };

    lines.push(String::new());
    lines.push("Score:".to_string());
    lines.push(format!("Player: {}", text(player)));
    lines.push(format!("Dealer: {}", text(dealer)));
}

/// One grid cell, cards framed by pipes, group symbols on the headers.
fn cell(game: &Game, row: usize, col: usize) -> String {
    match Grid::card_at(row, col) {
        Some(card) => {
            let text = format!("{:>3}", card.to_string());
            format!("|{}|", style(game, row, col, text, Some(card)))
        }
        None if row == 0 && col == 0 => " ".to_string(),
        None if row == 0 => {
            let text = Rank::from_value(col as u8)
                .map(|r| format!("{r:^5}"))
                .unwrap_or_default();
            style(game, row, col, text, None)
        }
        None => {
            let text = Suit::suits()
                .nth(row - 1)
                .map(|s| s.to_string())
                .unwrap_or_default();
            style(game, row, col, text, None)
        }
    }
}

/// Highlights a cell by its state, the cursor wins over everything else.
fn style(game: &Game, row: usize, col: usize, text: String, card: Option<Card>) -> String {
    let in_dealer = card.is_some_and(|c| game.dealer.contains(&c));
    let in_player = card.is_some_and(|c| game.player.contains(&c));
    let selected = card.is_some_and(|c| game.grid.is_selected(&c));

    if game.phase == Phase::Filtering && game.grid.cursor() == (row, col) {
        if selected && !in_dealer && !in_player {
            format!("{}", text.on_blue())
        } else {
            format!("{}", text.on_red())
        }
    } else if in_dealer {
        format!("{}", text.on_dark_grey())
    } else if in_player {
        format!("{}", text.on_magenta())
    } else if selected {
        format!("{}", text.on_dark_green())
    } else {
        text
    }
}
