//! Interactive select widget.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (InputEvent, Action, SelectionState)
//! - `update`: Pure transitions and default validation
//! - `view`: Pure rendering to text
//! - `run`: The session loop (effects, via a driver)
//! - `terminal`: The driver contract and its crossterm implementation
//! - `theme`: Colors and glyphs

pub mod run;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;
pub mod view;
