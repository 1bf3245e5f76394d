//! Pure state transitions: (SelectionState, Action) → SelectionState.
//!
//! This is the core logic of the widget. Fully testable without a terminal.
//! Events without a binding, and every event after confirmation, leave the
//! state unchanged.

use tracing::debug;

use crate::error::{Result, SelectError};

use super::state::{Action, InputEvent, SelectionState};

// ============================================================================
// DISPATCH
// ============================================================================

/// Map an input event to the action it requests, if any.
///
/// Digits only mean something in numeric-jump mode.
pub fn action_for(event: &InputEvent, numeric_jump: bool) -> Option<Action> {
    match event {
        InputEvent::MoveUp => Some(Action::MoveUp),
        InputEvent::MoveDown => Some(Action::MoveDown),
        InputEvent::Confirm => Some(Action::Confirm),
        InputEvent::Digit(c) if numeric_jump => c
            .to_digit(10)
            .map(|n| Action::JumpToIndex(n as usize)),
        _ => None,
    }
}

/// Pure state transition function.
pub fn update(state: SelectionState, action: Action, size: usize) -> SelectionState {
    if state.done {
        return state;
    }

    match action {
        Action::MoveUp => SelectionState::at(move_up(state.active, size)),
        Action::MoveDown => SelectionState::at(move_down(state.active, size)),
        Action::JumpToIndex(n) if (1..=size).contains(&n) => SelectionState::at(n),
        Action::JumpToIndex(_) => state,
        Action::Confirm => SelectionState {
            active: state.active,
            done: true,
        },
    }
}

/// Previous position, wrapping from the first row to the last.
fn move_up(active: usize, size: usize) -> usize {
    if active <= 1 { size } else { active - 1 }
}

/// Next position, wrapping from the last row to the first.
fn move_down(active: usize, size: usize) -> usize {
    if active >= size { 1 } else { active + 1 }
}

// ============================================================================
// SETUP VALIDATION
// ============================================================================

/// Check every default candidate against `[1, size]`.
///
/// Returns the first candidate, which is the only one that seeds the
/// highlight.
pub fn validate_defaults(defaults: &[usize], size: usize) -> Result<usize> {
    if size == 0 {
        return Err(SelectError::configuration("no choices to select from"));
    }

    let Some(&first) = defaults.first() else {
        return Err(SelectError::configuration("default index must be given"));
    };

    for &candidate in defaults {
        if !(1..=size).contains(&candidate) {
            return Err(SelectError::configuration(format!(
                "default index `{}` out of range (1 - {})",
                candidate, size
            )));
        }
    }

    Ok(first)
}

/// Parse a textual default index (CLI flag, config value).
pub fn parse_default(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SelectError::configuration("default index must not be empty"));
    }
    trimmed.parse::<usize>().map_err(|_| {
        SelectError::configuration(format!("default index `{}` is not a number", trimmed))
    })
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Owns the selection state for one session and feeds it events.
#[derive(Debug)]
pub struct SelectionController {
    state: SelectionState,
    size: usize,
    numeric_jump: bool,
}

impl SelectionController {
    /// Validate the defaults and start on the first one.
    pub fn new(size: usize, defaults: &[usize], numeric_jump: bool) -> Result<Self> {
        let active = validate_defaults(defaults, size)?;
        Ok(SelectionController {
            state: SelectionState::at(active),
            size,
            numeric_jump,
        })
    }

    /// Apply one input event. Returns true if the state changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let Some(action) = action_for(event, self.numeric_jump) else {
            debug!(?event, "ignored input");
            return false;
        };

        let next = update(self.state, action, self.size);
        let changed = next != self.state;
        debug!(?event, ?action, active = next.active, done = next.done, "dispatched input");
        self.state = next;
        changed
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn active(&self) -> usize {
        self.state.active
    }

    pub fn is_done(&self) -> bool {
        self.state.done
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn numeric_jump(&self) -> bool {
        self.numeric_jump
    }
}

// ============================================================================
// TESTS
// ============================================================================
