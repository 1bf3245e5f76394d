//! Color and glyph defaults for the select widget.
//!
//! Color semantics:
//! - Green: the active row and the confirmed answer
//! - Dark gray: help text (de-emphasized)

use crossterm::style::Color;

use crate::error::{Result, SelectError};

/// Active row and confirmed answer.
pub const ACTIVE_COLOR: Color = Color::Green;

/// Help / keybinding hint.
pub const HELP_COLOR: Color = Color::DarkGrey;

/// Glyph in front of the active row.
pub const DEFAULT_MARKER: &str = "‣";

/// Resolve a color name (`green`, `dark_grey`, ...) to a terminal color.
pub fn parse_color(name: &str) -> Result<Color> {
    Color::try_from(name.trim())
        .map_err(|_| SelectError::configuration(format!("unknown color `{}`", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_colors() {
        assert_eq!(ACTIVE_COLOR, Color::Green);
        assert_eq!(HELP_COLOR, Color::DarkGrey);
    }

    #[test]
    fn parse_known_names() {
        assert_eq!(parse_color("green").unwrap(), Color::Green);
        assert_eq!(parse_color("dark_grey").unwrap(), Color::DarkGrey);
        assert_eq!(parse_color(" Cyan ").unwrap(), Color::Cyan);
    }

    #[test]
    fn parse_unknown_name_is_configuration_error() {
        assert!(matches!(
            parse_color("chartreuse"),
            Err(SelectError::Configuration(_))
        ));
    }
}
