//! Session loop: read → update → redraw until the user confirms.
//!
//! This is the only TUI module with side effects, and all of them go
//! through the [`TerminalDriver`]. Decisions live in the pure layers
//! (state, update, view).
//!
//! Each redraw erases exactly the rows the previous frame painted: the
//! header (plus any embedded newlines) and one row per choice.

use std::io;

use crossterm::style::Color;
use tracing::debug;

use crate::config::SelectOptions;
use crate::error::Result;
use crate::registry::ChoiceRegistry;

use super::terminal::TerminalDriver;
use super::update::SelectionController;
use super::view::{Frame, ViewContext, render};

// ============================================================================
// REFRESH ARITHMETIC
// ============================================================================

/// Rows painted by one in-progress frame: the header line(s) and the menu.
pub fn erase_line_count(header: &str, choice_count: usize) -> usize {
    header.matches('\n').count() + 1 + choice_count
}

// ============================================================================
// SESSION
// ============================================================================

/// Run one select session and return the confirmed choice's value.
///
/// Defaults are validated before anything is printed. Once the cursor has
/// been hidden it is shown again on every exit path, including driver
/// failures.
pub fn run<T, D>(
    driver: &mut D,
    question: &str,
    registry: ChoiceRegistry<T>,
    options: &SelectOptions,
) -> Result<T>
where
    D: TerminalDriver + ?Sized,
{
    let mut controller =
        SelectionController::new(registry.size(), &options.defaults, options.numeric_jump())?;

    debug!(
        choices = registry.size(),
        default = controller.active(),
        numeric_jump = controller.numeric_jump(),
        "select session started"
    );

    let hide = driver.hide_cursor();
    driver.print(&hide)?;

    let outcome = drive(driver, question, &registry, options, &mut controller);

    let show = driver.show_cursor();
    let restored = driver.print(&show);
    outcome?;
    restored?;

    let active = controller.active();
    let choice = registry.into_choice(active)?;
    debug!(index = active, name = choice.name(), "select session resolved");
    Ok(choice.resolve())
}

/// The redraw loop plus the final answer frame.
fn drive<T, D>(
    driver: &mut D,
    question: &str,
    registry: &ChoiceRegistry<T>,
    options: &SelectOptions,
    controller: &mut SelectionController,
) -> Result<()>
where
    D: TerminalDriver + ?Sized,
{
    let mut first_render = true;

    while !controller.is_done() {
        let frame = draw(&*driver, question, registry, options, controller, first_render)?;
        first_render = false;
        paint(driver, &frame)?;

        let event = driver.read_event()?;
        controller.handle(&event);

        let clear = driver.clear_lines(erase_line_count(&frame.header, registry.size()));
        driver.print(&clear)?;
    }

    let frame = draw(&*driver, question, registry, options, controller, false)?;
    paint(driver, &frame)?;
    Ok(())
}

fn draw<T, D>(
    driver: &D,
    question: &str,
    registry: &ChoiceRegistry<T>,
    options: &SelectOptions,
    controller: &SelectionController,
    first_render: bool,
) -> Result<Frame>
where
    D: TerminalDriver + ?Sized,
{
    let ctx = ViewContext {
        question,
        registry,
        state: controller.state(),
        options,
        first_render,
    };
    render(&ctx, &|text: &str, color: Color| driver.decorate(text, color))
}

/// Header with a newline, menu without one, so the cursor stays on the
/// last painted row.
fn paint<D>(driver: &mut D, frame: &Frame) -> io::Result<()>
where
    D: TerminalDriver + ?Sized,
{
    driver.println(&frame.header)?;
    if let Some(menu) = &frame.menu {
        driver.print(menu)?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
