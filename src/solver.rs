//! Exhaustive backtracking search for a complete knight's tour.
//!
//! The search is plain depth-first with undo: no heuristic move ordering,
//! no memoization, no timeout. Callers needing bounded latency must impose
//! one externally.

use crate::engine::{self, Board, Cell};
use crate::moves::{candidate, KNIGHT_MOVES};
use std::fmt;

/// A complete tour found by [`solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    /// Height of the board the tour covers.
    pub height: usize,
    /// Width of the board the tour covers.
    pub width: usize,
    /// Every board square exactly once, in visit order; `squares[0]` is
    /// the starting square.
    pub squares: Vec<(usize, usize)>,
}

impl fmt::Display for Tour {
    /// Renders the tour as a framed grid with each square showing its
    /// 0-based visit order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut order = vec![vec![0; self.width]; self.height];
        for (i, &(r, c)) in self.squares.iter().enumerate() {
            order[r][c] = i;
        }
        let cell_size = (self.height * self.width).to_string().len();
        write!(
            f,
            "{}",
            engine::draw_framed_grid(self.height, self.width, cell_size, |r, c| {
                order[r][c].to_string()
            })
        )
    }
}

/// Searches the `height` x `width` board for a tour starting at `start`.
///
/// Explores knight moves depth-first in the fixed [`KNIGHT_MOVES`] order,
/// marking each tried square and unmarking it when the branch fails, and
/// returns as soon as one complete tour is found. `None` means the whole
/// space was exhausted without completing a tour; it is a valid outcome,
/// not a fault. Repeated calls with the same arguments return the same
/// result.
///
/// # Panics
/// Panics if either dimension is zero or `start` is out of bounds.
pub fn solve(start: (usize, usize), height: usize, width: usize) -> Option<Tour> {
    let mut board = Board::new(height, width);
    assert!(
        start.0 < height && start.1 < width,
        "starting square ({}, {}) is outside the {}x{} board",
        start.0,
        start.1,
        height,
        width
    );
    board.set_cell(start.0, start.1, Cell::Visited(0));

    let mut path = vec![start];
    if search(&mut board, start, &mut path) {
        Some(Tour {
            height,
            width,
            squares: path,
        })
    } else {
        None
    }
}

// Depth-first step: the path length doubles as the visit count and as the
// order assigned to the next square. Returns true as soon as the board is
// covered; on failure every square marked here has been unmarked again.
fn search(board: &mut Board, from: (usize, usize), path: &mut Vec<(usize, usize)>) -> bool {
    if path.len() == board.square_count() {
        return true;
    }
    for &offset in KNIGHT_MOVES.iter() {
        let (r, c) = candidate(from, offset);
        if !board.in_bounds(r, c) {
            continue;
        }
        let next = (r as usize, c as usize);
        if board.get_cell(next.0, next.1) != Cell::Unvisited {
            continue;
        }

        board.set_cell(next.0, next.1, Cell::Visited(path.len()));
        path.push(next);
        if search(board, next, path) {
            return true;
        }
        path.pop();
        board.set_cell(next.0, next.1, Cell::Unvisited);
    }
    false
}
