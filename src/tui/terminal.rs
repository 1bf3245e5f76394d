//! Terminal I/O driver: the only place that talks to a real terminal.
//!
//! The session loop programs against [`TerminalDriver`]. [`CrosstermDriver`]
//! implements it on stdout with crossterm; tests swap in a scripted driver.

use std::io::{self, Write};
use std::sync::Once;

use crossterm::Command;
use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Stylize, style};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};

use crate::error::{Result, SelectError};

use super::state::InputEvent;

// ============================================================================
// DRIVER CONTRACT
// ============================================================================

/// What a select session needs from the terminal.
pub trait TerminalDriver {
    /// Write text as-is.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a newline.
    fn println(&mut self, text: &str) -> io::Result<()>;

    /// Block until the next input event.
    fn read_event(&mut self) -> Result<InputEvent>;

    /// Style `text` in `color`.
    fn decorate(&self, text: &str, color: Color) -> String;

    fn hide_cursor(&self) -> String;

    fn show_cursor(&self) -> String;

    /// Sequence that blanks the current line and the `count - 1` lines
    /// above it, leaving the cursor at the start of the topmost one.
    fn clear_lines(&self, count: usize) -> String;
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to an input event.
///
/// Ctrl+C is an error: raw mode swallows SIGINT, so the driver reports the
/// interrupt instead of the shell.
pub fn map_key(key: KeyEvent) -> Result<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Err(SelectError::Interrupted);
    }

    let event = match key.code {
        KeyCode::Up | KeyCode::Char('k') => InputEvent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => InputEvent::MoveDown,
        KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Confirm,
        KeyCode::Char(c @ '0'..='9') => InputEvent::Digit(c),
        _ => InputEvent::Unrecognized,
    };
    Ok(event)
}

// ============================================================================
// CROSSTERM DRIVER
// ============================================================================

/// Driver over the process's stdout/stdin.
#[derive(Debug)]
pub struct CrosstermDriver {
    out: io::Stdout,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        install_panic_hook();
        CrosstermDriver { out: io::stdout() }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDriver for CrosstermDriver {
    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn println(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }

    fn read_event(&mut self) -> Result<InputEvent> {
        // Raw mode is scoped to the read; output is written in cooked mode.
        enable_raw_mode()?;
        let key = next_key_press();
        disable_raw_mode()?;
        map_key(key?)
    }

    fn decorate(&self, text: &str, color: Color) -> String {
        style(text).with(color).to_string()
    }

    fn hide_cursor(&self) -> String {
        ansi(Hide)
    }

    fn show_cursor(&self) -> String {
        ansi(Show)
    }

    fn clear_lines(&self, count: usize) -> String {
        let mut out = String::new();
        for i in 0..count {
            out.push_str(&ansi(Clear(ClearType::CurrentLine)));
            if i + 1 < count {
                out.push_str(&ansi(MoveUp(1)));
            }
        }
        out.push_str(&ansi(MoveToColumn(0)));
        out
    }
}

/// Read events until a key press arrives; resize, mouse, focus and key
/// releases are skipped.
fn next_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Render a crossterm command to its ANSI escape sequence.
fn ansi(command: impl Command) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = command.write_ansi(&mut out);
    out
}

/// Restore the terminal before the default panic output.
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            // Best-effort terminal restoration
            let _ = disable_raw_mode();
            let _ = io::stdout().write_all(ansi(Show).as_bytes());
            original_hook(panic_info);
        }));
    });
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_is_an_interrupt() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(map_key(key), Err(SelectError::Interrupted)));
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Up)).unwrap(), InputEvent::MoveUp);
        assert_eq!(map_key(key(KeyCode::Down)).unwrap(), InputEvent::MoveDown);
    }

    #[test]
    fn vim_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Char('k'))).unwrap(), InputEvent::MoveUp);
        assert_eq!(map_key(key(KeyCode::Char('j'))).unwrap(), InputEvent::MoveDown);
    }

    #[test]
    fn enter_and_space_confirm() {
        assert_eq!(map_key(key(KeyCode::Enter)).unwrap(), InputEvent::Confirm);
        assert_eq!(map_key(key(KeyCode::Char(' '))).unwrap(), InputEvent::Confirm);
    }

    #[test]
    fn digits_keep_raw_character() {
        for c in '0'..='9' {
            assert_eq!(map_key(key(KeyCode::Char(c))).unwrap(), InputEvent::Digit(c));
        }
    }

    #[test]
    fn unmapped_key_is_unrecognized() {
        assert_eq!(map_key(key(KeyCode::Char('z'))).unwrap(), InputEvent::Unrecognized);
        assert_eq!(map_key(key(KeyCode::Esc)).unwrap(), InputEvent::Unrecognized);
    }

    #[test]
    fn cursor_sequences() {
        let driver = CrosstermDriver::new();
        assert_eq!(driver.hide_cursor(), "\x1b[?25l");
        assert_eq!(driver.show_cursor(), "\x1b[?25h");
    }

    #[test]
    fn clear_lines_moves_up_between_clears() {
        let driver = CrosstermDriver::new();
        let seq = driver.clear_lines(3);
        assert_eq!(seq.matches("\x1b[2K").count(), 3);
        assert_eq!(seq.matches("\x1b[1A").count(), 2);
        assert!(seq.ends_with("\x1b[1G"));
    }

    #[test]
    fn decorate_keeps_text() {
        let driver = CrosstermDriver::new();
        let styled = driver.decorate("Apple", Color::Green);
        assert!(styled.contains("Apple"));
    }
}
