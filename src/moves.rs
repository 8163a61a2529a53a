//! Knight move geometry and legal-move evaluation.
//!
//! Everything here reads the [`Board`] without mutating it. The solver and
//! the interactive session both rely on [`legal_moves`]; the accessibility
//! count exists only to annotate candidates shown to a human player.

use crate::engine::{Board, Cell};

/// The eight knight move offsets as (row delta, column delta) pairs.
///
/// The order is fixed and significant: the solver tries offsets in this
/// order, so it also determines which of several existing tours is found
/// first. [`legal_moves`] returns its results in the same order.
pub const KNIGHT_MOVES: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// Applies a move offset to a square, with no bounds enforcement.
///
/// The result may be negative or past an edge; check it with
/// [`Board::in_bounds`] before use.
pub fn candidate(from: (usize, usize), offset: (isize, isize)) -> (isize, isize) {
    (from.0 as isize + offset.0, from.1 as isize + offset.1)
}

/// Returns every square reachable from `from` by one knight move that
/// lands in-bounds on an unvisited square.
///
/// The result follows [`KNIGHT_MOVES`] order. An empty result is a normal
/// terminal condition (the knight is stuck, or the tour is complete), not
/// an error.
pub fn legal_moves(board: &Board, from: (usize, usize)) -> Vec<(usize, usize)> {
    let mut targets = Vec::new();
    for &offset in KNIGHT_MOVES.iter() {
        let (r, c) = candidate(from, offset);
        if board.in_bounds(r, c) && board.get_cell(r as usize, c as usize) == Cell::Unvisited {
            targets.push((r as usize, c as usize));
        }
    }
    targets
}

/// Counts how many legal moves `square` would itself have if the knight
/// occupied it next.
///
/// `square` is treated as a hypothetical destination: the board is not
/// mutated, and the count is simply the number of unvisited in-bounds
/// neighbors `square` has right now. Advisory only; nothing in the crate
/// uses it to order or restrict moves.
pub fn accessibility(board: &Board, square: (usize, usize)) -> usize {
    legal_moves(board, square).len()
}

/// Pairs each legal move from `from` with its accessibility count.
///
/// This is the mapping the interactive mode displays to the player.
pub fn legal_moves_with_accessibility(
    board: &Board,
    from: (usize, usize),
) -> Vec<((usize, usize), usize)> {
    legal_moves(board, from)
        .into_iter()
        .map(|square| (square, accessibility(board, square)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_moves_are_eight_distinct_offsets() {
        assert_eq!(KNIGHT_MOVES.len(), 8);
        for (i, a) in KNIGHT_MOVES.iter().enumerate() {
            assert_eq!(a.0.abs() + a.1.abs(), 3);
            assert_ne!(a.0, 0);
            assert_ne!(a.1, 0);
            for b in KNIGHT_MOVES.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_candidate_is_unchecked_addition() {
        assert_eq!(candidate((0, 0), (-2, -1)), (-2, -1));
        assert_eq!(candidate((3, 4), (1, 2)), (4, 6));
        assert_eq!(candidate((1, 0), (-1, 2)), (0, 2));
    }

    #[test]
    fn test_legal_moves_from_corner_in_offset_order() {
        let board = Board::new(8, 8);
        // Only (2, 1) and (1, 2) stay on the board; (2, 1)'s offset comes
        // first in KNIGHT_MOVES.
        assert_eq!(legal_moves(&board, (0, 0)), vec![(2, 1), (1, 2)]);
    }

    #[test]
    fn test_legal_moves_excludes_visited_squares() {
        let mut board = Board::new(8, 8);
        board.set_cell(2, 1, Cell::Visited(0));
        assert_eq!(legal_moves(&board, (0, 0)), vec![(1, 2)]);

        board.set_cell(1, 2, Cell::Visited(1));
        assert!(legal_moves(&board, (0, 0)).is_empty());
    }

    #[test]
    fn test_legal_moves_center_of_3x3_is_empty() {
        let board = Board::new(3, 3);
        assert!(legal_moves(&board, (1, 1)).is_empty());
    }

    #[test]
    fn test_legal_moves_all_eight_from_open_center() {
        let board = Board::new(8, 8);
        let targets = legal_moves(&board, (3, 3));
        assert_eq!(targets.len(), 8);
        for &(r, c) in &targets {
            let dr = (r as isize - 3).abs();
            let dc = (c as isize - 3).abs();
            assert!((dr == 2 && dc == 1) || (dr == 1 && dc == 2));
        }
    }

    #[test]
    fn test_accessibility_counts_onward_moves() {
        let board = Board::new(8, 8);
        assert_eq!(accessibility(&board, (0, 0)), 2);
        assert_eq!(accessibility(&board, (3, 3)), 8);
        assert_eq!(accessibility(&board, (0, 3)), 4);
    }

    #[test]
    fn test_accessibility_ignores_visited_neighbors() {
        let mut board = Board::new(8, 8);
        assert_eq!(accessibility(&board, (2, 1)), 6);
        board.set_cell(0, 0, Cell::Visited(0));
        assert_eq!(accessibility(&board, (2, 1)), 5);
    }

    #[test]
    fn test_accessibility_does_not_mutate_board() {
        let board = Board::new(5, 5);
        let before = board.clone();
        accessibility(&board, (2, 2));
        legal_moves_with_accessibility(&board, (2, 2));
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_with_accessibility_pairs() {
        let mut board = Board::new(5, 5);
        board.set_cell(0, 0, Cell::Visited(0));
        // From the occupied corner, both candidates have five onward
        // moves: their full neighborhoods minus the visited corner.
        assert_eq!(
            legal_moves_with_accessibility(&board, (0, 0)),
            vec![((2, 1), 5), ((1, 2), 5)]
        );
    }
}
