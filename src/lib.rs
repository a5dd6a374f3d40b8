//! Tic-tac-toe with move history and time travel
//!
//! A two-player tic-tac-toe game with a native egui GUI. Every accepted
//! move snapshots the board into an append-only history; any past step
//! can be revisited from the move list, and playing from a past step
//! branches the game there, discarding the steps after it.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: marks, positions and the nine-cell board
//! - [`rules`]: win detection over the 8 fixed lines
//! - [`game`]: immutable game state and the action reducer
//! - [`ui`]: egui rendering of the board, status line and move list
//!
//! All state transitions go through [`game::reduce`]: the UI reads the
//! current [`GameState`], collects at most one [`Action`] per frame from
//! user input, and replaces the state with the reducer's result.
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{reduce, Action, GameState, Mark};
//!
//! let state = GameState::new();
//! let state = reduce(&state, Action::CellClicked(4));
//!
//! assert_eq!(state.history().len(), 2);
//! assert_eq!(state.current_board().get_index(4), Mark::X);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use game::{reduce, Action, GameState, HistoryEntry};
pub use rules::{check_winner, Win};
