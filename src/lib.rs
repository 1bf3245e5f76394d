//! tty-select: an interactive single-choice list for terminal applications.

pub mod config;
pub mod error;
pub mod prompt;
pub mod registry;
pub mod report;
pub mod tui;
pub mod types;

pub use config::{Config, SelectOptions};
pub use error::{Result, SelectError};
pub use prompt::Select;
pub use registry::ChoiceRegistry;
pub use tui::state::InputEvent;
pub use tui::terminal::{CrosstermDriver, TerminalDriver};
pub use types::Choice;
