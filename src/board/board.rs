//! Nine-cell board with occupancy queries

use super::{Mark, Pos, TOTAL_CELLS};

/// Game board, cells stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Get mark at cell index
    #[inline]
    pub fn get_index(&self, idx: usize) -> Mark {
        self.cells[idx]
    }

    /// Check if the cell at `idx` is empty
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        self.cells[idx] == Mark::Empty
    }

    /// Place a mark (the cell must be empty, callers check occupancy first)
    #[inline]
    pub fn place_mark(&mut self, idx: usize, mark: Mark) {
        debug_assert!(self.cells[idx].is_empty());
        self.cells[idx] = mark;
    }

    /// Copy of this board with one additional mark placed
    #[inline]
    pub fn with_mark(mut self, idx: usize, mark: Mark) -> Self {
        self.place_mark(idx, mark);
        self
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if the board has no marks
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Check if every cell is marked
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
