//! # Knight's Tour Library
//!
//! This library provides the core model for the Knight's Tour puzzle:
//! a rectangular board of visit-tagged squares, the knight move geometry,
//! an exhaustive backtracking solver, and a forward-only interactive
//! session for human play.
//!
//! It is used by two binaries:
//! - `human_player`: plays the tour interactively via the command line,
//!   annotating each candidate square with how many onward moves it would
//!   keep open.
//! - `auto_solver`: searches for a complete tour of a given board and
//!   prints the visit order.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`, `Cell`), board rendering,
//!   and the interactive session state machine (`Session`).
//! - `moves`: the eight knight move offsets and the legal-move and
//!   accessibility evaluation shared by the solver and the session.
//! - `solver`: the `solve` function, a depth-first search with undo that
//!   finds one complete tour or proves none exists under its move order.
//! - `utils`: parsing of user-entered board dimensions and squares.

pub mod engine;
pub mod moves;
pub mod solver;
pub mod utils;
