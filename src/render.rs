//! Text rendering of board pairs.

use std::fmt::Write as _;

use crate::board::{Board, WATER};
use crate::common::CellState;

fn column_label(x: usize) -> char {
    if x < 26 {
        (b'A' + x as u8) as char
    } else {
        '?'
    }
}

fn shot_marker(state: CellState) -> char {
    match state {
        CellState::Untried => '·',
        CellState::Miss => 'o',
        CellState::Hit => 'x',
        CellState::Sunk => '#',
    }
}

/// Draws a side's fleet and the tracking view of the opponent as plain text.
#[derive(Debug, Default)]
pub struct BoardRenderer;

impl BoardRenderer {
    pub fn new() -> Self {
        BoardRenderer
    }

    /// Render the own fleet (ship outlines over water) and the opponent
    /// tracking grid (shot markers only, ships hidden).
    pub fn draw(&self, own: &Board, opponent: &Board) -> String {
        let mut out = String::new();
        out.push_str("Own fleet:\n");
        self.draw_fleet(&mut out, own);
        out.push_str("\nOpponent (tracking):\n");
        self.draw_tracking(&mut out, opponent);
        out
    }

    fn draw_header(&self, out: &mut String, width: usize) {
        out.push_str("   ");
        for x in 0..width {
            let _ = write!(out, " {}", column_label(x));
        }
        out.push('\n');
    }

    fn draw_fleet(&self, out: &mut String, board: &Board) {
        self.draw_header(out, board.width());
        for (y, row) in board.occupancy().rows().enumerate() {
            let _ = write!(out, "{:2} ", y + 1);
            for (x, &id) in row.iter().enumerate() {
                let hit = board
                    .hits()
                    .get(x, y)
                    .map_or(CellState::Untried, |&s| s);
                let marker = if hit.is_struck() {
                    shot_marker(hit)
                } else if id == WATER {
                    '·'
                } else {
                    // ship ids are single digits for any sane roster
                    char::from_digit((id % 10) as u32, 10).unwrap_or('S')
                };
                let _ = write!(out, " {}", marker);
            }
            out.push('\n');
        }
    }

    fn draw_tracking(&self, out: &mut String, board: &Board) {
        self.draw_header(out, board.width());
        for (y, row) in board.hits().rows().enumerate() {
            let _ = write!(out, "{:2} ", y + 1);
            for &state in row {
                let _ = write!(out, " {}", shot_marker(state));
            }
            out.push('\n');
        }
    }
}
