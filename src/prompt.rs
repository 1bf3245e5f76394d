//! Builder entry point for a select session.
//!
//! ```no_run
//! use tty_select::Select;
//!
//! let fruit = Select::new("Pick a fruit?")
//!     .choice("Apple", 1)
//!     .choice("Banana", 2)
//!     .enumerate(")")
//!     .default(2)
//!     .interact()?;
//! # Ok::<(), tty_select::SelectError>(())
//! ```

use crossterm::style::Color;

use crate::config::{Config, SelectOptions};
use crate::error::Result;
use crate::registry::ChoiceRegistry;
use crate::tui::run::run;
use crate::tui::terminal::{CrosstermDriver, TerminalDriver};
use crate::types::Choice;

/// A question plus the choices and options to ask it with.
#[derive(Debug)]
pub struct Select<T> {
    question: String,
    registry: ChoiceRegistry<T>,
    options: SelectOptions,
}

impl<T> Select<T> {
    /// Built-in defaults, ignoring the config file.
    pub fn new(question: impl Into<String>) -> Self {
        Self::with_options(question, SelectOptions::default())
    }

    pub fn with_options(question: impl Into<String>, options: SelectOptions) -> Self {
        Select {
            question: question.into(),
            registry: ChoiceRegistry::new(),
            options,
        }
    }

    /// Start from the user's config file (see [`Config::load`]).
    pub fn from_config(question: impl Into<String>) -> Result<Self> {
        let options = Config::load().into_options()?;
        Ok(Self::with_options(question, options))
    }

    pub fn choice(mut self, name: impl Into<String>, value: T) -> Self {
        self.registry.append(name, value);
        self
    }

    /// A choice whose `action` runs if it ends up selected.
    pub fn choice_with_action(
        mut self,
        name: impl Into<String>,
        value: T,
        action: impl Fn(&T) + 'static,
    ) -> Self {
        self.registry.append_with_action(name, value, action);
        self
    }

    pub fn choices<N, I>(mut self, entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, T)>,
    {
        self.registry.append_all(entries);
        self
    }

    pub fn push(mut self, choice: Choice<T>) -> Self {
        self.registry.push(choice);
        self
    }

    /// 1-based position highlighted at start.
    pub fn default(self, index: usize) -> Self {
        self.defaults(vec![index])
    }

    /// Several candidates: all are validated, the first one is used.
    pub fn defaults(mut self, indices: Vec<usize>) -> Self {
        self.options.defaults = indices;
        self
    }

    /// Number the rows with `delimiter` and accept digit jumps.
    pub fn enumerate(mut self, delimiter: impl Into<String>) -> Self {
        self.options.enumeration_delimiter = Some(delimiter.into());
        self
    }

    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.options.marker = marker.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.options.help = Some(help.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = prefix.into();
        self
    }

    pub fn active_color(mut self, color: Color) -> Self {
        self.options.active_color = color;
        self
    }

    pub fn help_color(mut self, color: Color) -> Self {
        self.options.help_color = color;
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    pub fn registry(&self) -> &ChoiceRegistry<T> {
        &self.registry
    }

    /// Ask on the real terminal.
    pub fn interact(self) -> Result<T> {
        let mut driver = CrosstermDriver::new();
        self.interact_with(&mut driver)
    }

    /// Ask through any driver.
    pub fn interact_with<D>(self, driver: &mut D) -> Result<T>
    where
        D: TerminalDriver + ?Sized,
    {
        run(driver, &self.question, self.registry, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_choices_in_order() {
        let select = Select::new("Fruit?")
            .choice("Apple", 1)
            .choices([("Banana", 2), ("Cherry", 3)])
            .push(Choice::new("Damson", 4));

        let names: Vec<&str> = select.registry().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Apple", "Banana", "Cherry", "Damson"]);
        assert_eq!(select.question(), "Fruit?");
    }

    #[test]
    fn builder_sets_options() {
        let select: Select<i32> = Select::new("Q")
            .default(3)
            .enumerate(".")
            .marker(">")
            .help("go")
            .prefix("? ")
            .active_color(Color::Cyan)
            .help_color(Color::Grey);

        let options = select.options();
        assert_eq!(options.defaults, vec![3]);
        assert_eq!(options.enumeration_delimiter.as_deref(), Some("."));
        assert!(options.numeric_jump());
        assert_eq!(options.marker, ">");
        assert_eq!(options.help.as_deref(), Some("go"));
        assert_eq!(options.prefix, "? ");
        assert_eq!(options.active_color, Color::Cyan);
        assert_eq!(options.help_color, Color::Grey);
    }

    #[test]
    fn defaults_keep_every_candidate() {
        let select: Select<()> = Select::new("Q").defaults(vec![2, 1]);
        assert_eq!(select.options().defaults, vec![2, 1]);
    }
}
