//! Immutable game state with full move history

use tracing::debug;

use crate::board::{Board, Mark, Pos, TOTAL_CELLS};
use crate::rules::{check_winner, Win};

/// One snapshot in the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Board after the move was played
    pub board: Board,
    /// Cell the move was played at, `None` only for the initial entry
    pub played: Option<Pos>,
}

/// Full game state: every board reached so far plus the viewed step.
///
/// Invariants:
/// - `history` is never empty and `history[0]` is the empty board
/// - `current_step < history.len()`
/// - the mark to move is derived from `current_step` parity, X on even
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    sort_ascending: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                played: None,
            }],
            current_step: 0,
            sort_ascending: true,
        }
    }

    /// History entries in insertion order
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Step currently shown on the board
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Move-list presentation order
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Board at the viewed step
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// Mark that moves next from the viewed step
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Winner at the viewed step, if that board is decided
    pub fn winner(&self) -> Option<Win> {
        check_winner(self.current_board())
    }

    /// Whether the viewed step is a finished drawn game.
    ///
    /// Keys off the step count: step 9 is only reachable through nine
    /// accepted moves, which fill the board.
    pub fn is_draw(&self) -> bool {
        self.current_step == TOTAL_CELLS && self.winner().is_none()
    }

    /// Status line for the viewed step
    pub fn status_line(&self) -> String {
        if let Some(win) = self.winner() {
            format!("Winner is player: {}", win.mark)
        } else if self.current_step == TOTAL_CELLS {
            "Match ended in a draw".to_string()
        } else {
            format!("Next move is for player: {}", self.next_mark())
        }
    }

    /// Move-list label for a history step
    pub fn move_label(&self, step: usize) -> String {
        match self.history[step].played {
            Some(pos) => {
                let (col, row) = pos.display_coords();
                format!("Go to move #{step} - ({col},{row})")
            }
            None => "Go to the game start".to_string(),
        }
    }

    /// Play at `cell`, branching history off the viewed step.
    ///
    /// A click on an occupied cell, or on a board that is already
    /// decided, leaves the state unchanged. `cell` must be below
    /// [`TOTAL_CELLS`].
    #[must_use]
    pub fn apply_move(&self, cell: usize) -> Self {
        debug_assert!(cell < TOTAL_CELLS);

        let board = self.current_board();
        if check_winner(board).is_some() || !board.is_empty(cell) {
            debug!(cell, step = self.current_step, "move ignored");
            return self.clone();
        }

        let mark = self.next_mark();
        let mut history: Vec<HistoryEntry> = self.history[..=self.current_step].to_vec();
        history.push(HistoryEntry {
            board: board.with_mark(cell, mark),
            played: Some(Pos::from_index(cell)),
        });

        debug!(cell, %mark, step = history.len() - 1, "move accepted");
        Self {
            current_step: history.len() - 1,
            history,
            sort_ascending: self.sort_ascending,
        }
    }

    /// View the board as of `step`; history is untouched.
    ///
    /// `step` must be a step already present in the history.
    #[must_use]
    pub fn jump_to(&self, step: usize) -> Self {
        debug_assert!(step < self.history.len());
        debug!(step, "jump");
        Self {
            current_step: step,
            ..self.clone()
        }
    }

    /// Flip the move-list presentation order
    #[must_use]
    pub fn toggle_sort(&self) -> Self {
        Self {
            sort_ascending: !self.sort_ascending,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
