//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use std::collections::VecDeque;

use noughts::{
    ports::MovePicker,
    tictactoe::{Board, Player, Position},
};

/// Picker that replays a fixed list of positions.
///
/// Returns `None` once the script is exhausted or when the scripted position
/// is not among the candidates.
pub struct ScriptedPicker {
    script: VecDeque<Position>,
}

impl ScriptedPicker {
    pub fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            script: moves.iter().copied().map(Position::from).collect(),
        }
    }
}

impl MovePicker for ScriptedPicker {
    fn pick_one(&mut self, candidates: &[Position]) -> Option<Position> {
        let next = self.script.pop_front()?;
        candidates.contains(&next).then_some(next)
    }
}

/// Picker that always takes the first candidate (row-major order)
pub struct FirstPicker;

impl MovePicker for FirstPicker {
    fn pick_one(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.first().copied()
    }
}

/// Build a board from rows of 'X', 'O' and '.' characters
pub fn board_from_rows(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            match c {
                'X' => board.place(row, col, Player::X).unwrap(),
                'O' => board.place(row, col, Player::O).unwrap(),
                _ => {}
            }
        }
    }
    board
}
