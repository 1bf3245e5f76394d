//! Pure rendering: map selection state to display text.
//!
//! Nothing here writes to the terminal or mutates state. Color styling is
//! injected as a `decorate` function so the same code serves the real
//! driver and the tests.

use crossterm::style::Color;

use crate::config::SelectOptions;
use crate::error::Result;
use crate::registry::ChoiceRegistry;

use super::state::SelectionState;

/// Help text shown on the first frame when no custom help is set.
pub const DEFAULT_HELP: &str = "Use arrow keys, press Enter to select";

/// Everything the renderer reads.
#[derive(Debug)]
pub struct ViewContext<'a, T> {
    pub question: &'a str,
    pub registry: &'a ChoiceRegistry<T>,
    pub state: SelectionState,
    pub options: &'a SelectOptions,
    /// True only for the very first frame of a session.
    pub first_render: bool,
}

/// Text for one redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// `prefix + question + " " + trailer`.
    pub header: String,
    /// One line per choice, no trailing newline. `None` once done.
    pub menu: Option<String>,
}

/// Render the header and (unless done) the menu.
pub fn render<T>(ctx: &ViewContext<'_, T>, decorate: &dyn Fn(&str, Color) -> String) -> Result<Frame> {
    let header = render_header(ctx, decorate)?;
    let menu = if ctx.state.done {
        None
    } else {
        Some(render_menu(ctx, decorate))
    };
    Ok(Frame { header, menu })
}

// ============================================================================
// HEADER
// ============================================================================

fn render_header<T>(ctx: &ViewContext<'_, T>, decorate: &dyn Fn(&str, Color) -> String) -> Result<String> {
    let trailer = if ctx.state.done {
        let chosen = ctx.registry.at(ctx.state.active)?;
        decorate(chosen.name(), ctx.options.active_color)
    } else if ctx.first_render {
        decorate(&help_text(ctx.options, ctx.registry.size()), ctx.options.help_color)
    } else {
        String::new()
    };

    Ok(format!("{}{} {}", ctx.options.prefix, ctx.question, trailer))
}

/// Custom help if configured, else the generated hint.
pub fn help_text(options: &SelectOptions, size: usize) -> String {
    match &options.help {
        Some(custom) => custom.clone(),
        None if options.numeric_jump() => {
            format!("Use arrow or number (1-{}) keys, press Enter to select", size)
        }
        None => DEFAULT_HELP.to_string(),
    }
}

// ============================================================================
// MENU
// ============================================================================

fn render_menu<T>(ctx: &ViewContext<'_, T>, decorate: &dyn Fn(&str, Color) -> String) -> String {
    let delimiter = ctx.options.enumeration_delimiter.as_deref();

    ctx.registry
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let position = i + 1;
            let number = match delimiter {
                Some(delim) => format!("{}{} ", position, delim),
                None => String::new(),
            };

            if position == ctx.state.active {
                let line = format!("{} {}{}", ctx.options.marker, number, choice.name());
                decorate(&line, ctx.options.active_color)
            } else {
                format!("  {}{}", number, choice.name())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Marks decorated text so assertions can see what got styled.
    fn tag(text: &str, color: Color) -> String {
        format!("<{:?}>{}</>", color, text)
    }

    fn fruit() -> ChoiceRegistry<i32> {
        [("Apple", 1), ("Banana", 2), ("Cherry", 3)].into_iter().collect()
    }

    fn ctx<'a>(
        registry: &'a ChoiceRegistry<i32>,
        options: &'a SelectOptions,
        state: SelectionState,
        first_render: bool,
    ) -> ViewContext<'a, i32> {
        ViewContext {
            question: "Fruit?",
            registry,
            state,
            options,
            first_render,
        }
    }

    #[test]
    fn first_frame_shows_help_and_menu() {
        let registry = fruit();
        let options = SelectOptions::default();
        let frame = render(&ctx(&registry, &options, SelectionState::at(1), true), &tag).unwrap();

        assert_eq!(
            frame.header,
            "Fruit? <DarkGrey>Use arrow keys, press Enter to select</>"
        );
        assert_eq!(
            frame.menu.as_deref(),
            Some("<Green>‣ Apple</>\n  Banana\n  Cherry")
        );
    }

    #[test]
    fn later_frames_drop_help() {
        let registry = fruit();
        let options = SelectOptions::default();
        let frame = render(&ctx(&registry, &options, SelectionState::at(2), false), &tag).unwrap();

        assert_eq!(frame.header, "Fruit? ");
        assert_eq!(
            frame.menu.as_deref(),
            Some("  Apple\n<Green>‣ Banana</>\n  Cherry")
        );
    }

    #[test]
    fn done_frame_shows_answer_without_menu() {
        let registry = fruit();
        let options = SelectOptions::default();
        let state = SelectionState {
            active: 3,
            done: true,
        };
        let frame = render(&ctx(&registry, &options, state, false), &tag).unwrap();

        assert_eq!(frame.header, "Fruit? <Green>Cherry</>");
        assert_eq!(frame.menu, None);
    }

    #[test]
    fn enumerated_menu_numbers_rows() {
        let registry = fruit();
        let options = SelectOptions {
            enumeration_delimiter: Some(")".into()),
            ..Default::default()
        };
        let frame = render(&ctx(&registry, &options, SelectionState::at(2), true), &tag).unwrap();

        assert_eq!(
            frame.header,
            "Fruit? <DarkGrey>Use arrow or number (1-3) keys, press Enter to select</>"
        );
        assert_eq!(
            frame.menu.as_deref(),
            Some("  1) Apple\n<Green>‣ 2) Banana</>\n  3) Cherry")
        );
    }

    #[test]
    fn custom_help_prefix_and_marker() {
        let registry = fruit();
        let options = SelectOptions {
            help: Some("pick one".into()),
            prefix: "? ".into(),
            marker: ">".into(),
            active_color: Color::Cyan,
            ..Default::default()
        };
        let frame = render(&ctx(&registry, &options, SelectionState::at(1), true), &tag).unwrap();

        assert_eq!(frame.header, "? Fruit? <DarkGrey>pick one</>");
        assert!(frame.menu.unwrap().starts_with("<Cyan>> Apple</>"));
    }

    #[test]
    fn menu_has_no_trailing_newline() {
        let registry = fruit();
        let options = SelectOptions::default();
        let frame = render(&ctx(&registry, &options, SelectionState::at(3), false), &tag).unwrap();
        let menu = frame.menu.unwrap();
        assert!(!menu.ends_with('\n'));
        assert_eq!(menu.lines().count(), 3);
    }

    #[test]
    fn done_with_bad_index_is_an_index_error() {
        let registry = fruit();
        let options = SelectOptions::default();
        let state = SelectionState {
            active: 9,
            done: true,
        };
        assert!(render(&ctx(&registry, &options, state, false), &tag).is_err());
    }
}
