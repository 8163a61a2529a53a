//! Core engine for the Knight's Tour puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Cell`: the visit state of a single board square.
//! - `Board`: the rectangular grid of cells, with bounds queries and
//!   text rendering.
//! - `Session`: an interactive, forward-only tour in progress, tracking
//!   the knight's square and the number of squares visited so far.
use crate::moves;
use std::error::Error;
use std::fmt;

/// Represents the visit state of a single square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// The knight has not been here yet.
    Unvisited,
    /// The knight occupied this square as the `n`-th square of the tour
    /// (0-based). The square holding the maximum order is the knight's
    /// current position.
    Visited(usize),
}

/// Represents the board as a `height` x `width` grid of [`Cell`]s.
///
/// The board owns no game logic beyond storage and bounds queries; legal
/// moves are computed by the [`moves`] module and tours are driven by the
/// solver or a [`Session`]. Row 0, column 0 is the bottom-left square of
/// the rendered output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    grid: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates a new board with every square unvisited.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use knights_tour::engine::{Board, Cell};
    /// let board = Board::new(3, 4);
    /// assert_eq!(board.get_cell(0, 0), Cell::Unvisited);
    /// assert_eq!(board.square_count(), 12);
    /// ```
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height > 0 && width > 0,
            "board dimensions must be positive, got {}x{}",
            height,
            width
        );
        Board {
            height,
            width,
            grid: vec![vec![Cell::Unvisited; width]; height],
        }
    }

    /// Returns the board height in squares.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the board width in squares.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the total number of squares on the board.
    pub fn square_count(&self) -> usize {
        self.height * self.width
    }

    /// Reports whether a candidate coordinate pair lies on the board.
    ///
    /// Takes signed coordinates so callers can test the raw result of
    /// applying a move offset without wrapping underflow themselves.
    pub fn in_bounds(&self, r: isize, c: isize) -> bool {
        r >= 0 && (r as usize) < self.height && c >= 0 && (c as usize) < self.width
    }

    /// Returns the cell at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn get_cell(&self, r: usize, c: usize) -> Cell {
        self.grid[r][c]
    }

    /// Sets the cell at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn set_cell(&mut self, r: usize, c: usize, cell: Cell) {
        self.grid[r][c] = cell;
    }

    /// Returns the knight's current square: the visited square with the
    /// highest visit order, or `None` if nothing has been visited.
    pub fn current_square(&self) -> Option<(usize, usize)> {
        let mut newest: Option<(usize, usize, usize)> = None;
        for r in 0..self.height {
            for c in 0..self.width {
                if let Cell::Visited(order) = self.grid[r][c] {
                    if newest.map_or(true, |(_, _, latest)| order > latest) {
                        newest = Some((r, c, order));
                    }
                }
            }
        }
        newest.map(|(r, c, _)| (r, c))
    }

    /// Generates a string representation of the board with candidate
    /// squares annotated.
    ///
    /// Visited squares show `*`, the knight's current square shows `X`,
    /// and each square in `hints` shows its accessibility count instead of
    /// the unvisited `_` filler. The output is framed, with 1-based row
    /// labels counting up from the bottom edge and 1-based column labels
    /// underneath.
    ///
    /// # Arguments
    /// * `hints`: squares to annotate, as returned by
    ///   [`Session::possible_moves`]. Pass an empty slice for a plain
    ///   board.
    pub fn to_string_with_hints(&self, hints: &[((usize, usize), usize)]) -> String {
        let cell_size = self.square_count().to_string().len();
        let current = self.current_square();
        draw_framed_grid(self.height, self.width, cell_size, |r, c| {
            if let Some(&(_, count)) = hints.iter().find(|&&(square, _)| square == (r, c)) {
                count.to_string()
            } else if current == Some((r, c)) {
                "X".to_string()
            } else if matches!(self.grid[r][c], Cell::Visited(_)) {
                "*".to_string()
            } else {
                "_".repeat(cell_size)
            }
        })
    }
}

impl fmt::Display for Board {
    /// Formats the board for display using `to_string_with_hints(&[])`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_hints(&[]))
    }
}

// Framed grid layout shared by the in-play board and the solved tour:
// a dashed frame, 1-based row labels counting up from the bottom edge,
// and 1-based column labels along the bottom. `marker_at` supplies the
// cell content, right-justified to `cell_size` characters.
pub(crate) fn draw_framed_grid<F>(
    height: usize,
    width: usize,
    cell_size: usize,
    marker_at: F,
) -> String
where
    F: Fn(usize, usize) -> String,
{
    let label_width = height.to_string().len();
    let frame = format!(
        "{}{}",
        " ".repeat(label_width),
        "-".repeat(width * (cell_size + 1) + 3)
    );

    let mut output = String::new();
    output.push_str(&frame);
    output.push('\n');
    for r in (0..height).rev() {
        output.push_str(&format!("{:>w$}| ", r + 1, w = label_width));
        for c in 0..width {
            output.push_str(&format!("{:>w$} ", marker_at(r, c), w = cell_size));
        }
        output.push('|');
        output.push('\n');
    }
    output.push_str(&frame);
    output.push('\n');
    output.push_str(&" ".repeat(label_width + 1));
    for c in 0..width {
        output.push_str(&format!(" {:>w$}", c + 1, w = cell_size));
    }
    output
}

/// The observable state of a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// At least one legal move remains.
    InProgress,
    /// Every square has been visited. Terminal.
    Completed,
    /// No legal move remains but unvisited squares do. Terminal.
    Stuck,
}

/// Error returned by [`Session::apply_move`] when the chosen square is not
/// a legal knight move from the current square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalMove {
    /// The rejected destination square.
    pub attempted: (usize, usize),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "square ({}, {}) is not a legal knight move",
            self.attempted.0, self.attempted.1
        )
    }
}

impl Error for IllegalMove {}

/// Manages a human-controlled tour in progress.
///
/// A session only ever advances: each accepted move marks one more square
/// visited, and there is no undo. Play ends when every square is visited
/// (`Completed`) or no legal move remains (`Stuck`).
///
/// # Examples
/// ```
/// use knights_tour::engine::{Session, SessionState};
///
/// let mut session = Session::new((0, 0), 5, 5);
/// assert_eq!(session.visited_count(), 1);
/// assert_eq!(session.state(), SessionState::InProgress);
///
/// // Candidate squares come paired with their accessibility counts.
/// let candidates = session.possible_moves();
/// let (square, _onward) = candidates[0];
/// assert_eq!(session.apply_move(square), Ok(SessionState::InProgress));
/// assert_eq!(session.visited_count(), 2);
///
/// // A square outside the legal set is rejected and nothing changes.
/// assert!(session.apply_move((0, 0)).is_err());
/// assert_eq!(session.visited_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    current: (usize, usize),
    visited: usize,
}

impl Session {
    /// Creates a new session with the knight placed on `start`.
    ///
    /// The start square counts as visited, so `visited_count` begins at 1.
    ///
    /// # Panics
    /// Panics if either dimension is zero or `start` is out of bounds.
    pub fn new(start: (usize, usize), height: usize, width: usize) -> Self {
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
        Session {
            board,
            current: start,
            visited: 1,
        }
    }

    /// Returns an immutable reference to the session's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the knight's current square.
    pub fn current(&self) -> (usize, usize) {
        self.current
    }

    /// Returns the number of squares visited so far, including the start.
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// Returns every legal destination square paired with its
    /// accessibility count, in the fixed move-offset order.
    ///
    /// The counts are display hints for the player; they never restrict
    /// or reorder which moves are accepted.
    pub fn possible_moves(&self) -> Vec<((usize, usize), usize)> {
        moves::legal_moves_with_accessibility(&self.board, self.current)
    }

    /// Derives the session state from the board.
    pub fn state(&self) -> SessionState {
        if self.visited == self.board.square_count() {
            SessionState::Completed
        } else if moves::legal_moves(&self.board, self.current).is_empty() {
            SessionState::Stuck
        } else {
            SessionState::InProgress
        }
    }

    /// Reports whether the session has ended (`Completed` or `Stuck`).
    pub fn is_terminal(&self) -> bool {
        self.state() != SessionState::InProgress
    }

    /// Moves the knight to `to`, which must be a member of the current
    /// legal-move set.
    ///
    /// On success the destination is marked visited, the visit count
    /// increments, and the resulting state is returned. On rejection the
    /// board is untouched; the caller is expected to re-solicit input.
    pub fn apply_move(&mut self, to: (usize, usize)) -> Result<SessionState, IllegalMove> {
        if !moves::legal_moves(&self.board, self.current).contains(&to) {
            return Err(IllegalMove { attempted: to });
        }
        self.board.set_cell(to.0, to.1, Cell::Visited(self.visited));
        self.current = to;
        self.visited += 1;
        Ok(self.state())
    }
}
