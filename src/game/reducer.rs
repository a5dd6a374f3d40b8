//! Action dispatch over [`GameState`]

use tracing::debug;

use super::state::GameState;

/// User intents emitted by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A board cell was activated
    CellClicked(usize),
    /// A move-list entry was activated
    JumpTo(usize),
    /// The sort control was activated
    ToggleSortOrder,
}

/// Pure reducer: maps the current state and one action to the next state
pub fn reduce(state: &GameState, action: Action) -> GameState {
    debug!(?action, "dispatch");
    match action {
        Action::CellClicked(cell) => state.apply_move(cell),
        Action::JumpTo(step) => state.jump_to(step),
        Action::ToggleSortOrder => state.toggle_sort(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_cell_click_dispatches_a_move() {
        let state = GameState::new();
        let next = reduce(&state, Action::CellClicked(4));
        assert_eq!(next.current_board().get_index(4), Mark::X);
        assert_eq!(next.current_step(), 1);
    }

    #[test]
    fn test_jump_dispatches_without_touching_history() {
        let state = reduce(&GameState::new(), Action::CellClicked(0));
        let jumped = reduce(&state, Action::JumpTo(0));
        assert_eq!(jumped.current_step(), 0);
        assert_eq!(jumped.history().len(), 2);
    }

    #[test]
    fn test_toggle_dispatches() {
        let state = GameState::new();
        assert!(!reduce(&state, Action::ToggleSortOrder).sort_ascending());
    }
}
