//! Selection state algebra: pure types, zero effects.
//!
//! These types define the whole state space of a select session. The
//! transition layer (`update`) and the rendering layer (`view`) both
//! program against them; only `run` and `terminal` touch the outside world.

// ============================================================================
// INPUT EVENTS
// ============================================================================

/// One event read from the terminal driver.
///
/// Raw keys are mapped to these by the driver, so the state machine never
/// sees terminal-specific key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Up arrow (or `k`).
    MoveUp,
    /// Down arrow (or `j`).
    MoveDown,
    /// Enter or Space: select / accept the active row.
    Confirm,
    /// A digit key, carrying the raw character typed.
    Digit(char),
    /// Anything the widget has no binding for.
    Unrecognized,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic transition requested by an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    /// Jump to a 1-based position (numeric-jump mode only).
    JumpToIndex(usize),
    Confirm,
}

// ============================================================================
// SELECTION STATE
// ============================================================================

/// Where the highlight is and whether the session has finished.
///
/// `active` is 1-based and stays inside `[1, size]` for the registry it
/// was built against. `done` only ever flips from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub active: usize,
    pub done: bool,
}

impl SelectionState {
    /// Fresh, not-yet-confirmed state highlighting `active`.
    pub fn at(active: usize) -> Self {
        SelectionState {
            active,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_not_done() {
        let state = SelectionState::at(2);
        assert_eq!(state.active, 2);
        assert!(!state.done);
    }

    #[test]
    fn digit_events_carry_their_character() {
        assert_eq!(InputEvent::Digit('3'), InputEvent::Digit('3'));
        assert_ne!(InputEvent::Digit('3'), InputEvent::Digit('4'));
    }

    #[test]
    fn jump_actions_compare_by_target() {
        assert_eq!(Action::JumpToIndex(1), Action::JumpToIndex(1));
        assert_ne!(Action::JumpToIndex(1), Action::MoveDown);
    }
}
