//! Domain types for tty-select.

use std::fmt;

// ============================================================================
// CHOICES
// ============================================================================

/// Callback run with the value of a choice once it is confirmed.
pub type ChoiceAction<T> = Box<dyn Fn(&T)>;

/// One selectable entry: a display name and an opaque value.
///
/// Identity is positional (its 1-based index in the registry), so
/// duplicate names are fine.
pub struct Choice<T> {
    name: String,
    value: T,
    action: Option<ChoiceAction<T>>,
}

impl<T> Choice<T> {
    /// A plain name/value pair.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Choice {
            name: name.into(),
            value,
            action: None,
        }
    }

    /// A choice that runs `action` when it becomes the confirmed result.
    pub fn with_action(name: impl Into<String>, value: T, action: impl Fn(&T) + 'static) -> Self {
        Choice {
            name: name.into(),
            value,
            action: Some(Box::new(action)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Run the attached action (if any) and hand back the value.
    pub fn resolve(self) -> T {
        if let Some(action) = &self.action {
            action(&self.value);
        }
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("action", &self.action.is_some())
            .finish()
    }
}

impl<N: Into<String>, T> From<(N, T)> for Choice<T> {
    fn from((name, value): (N, T)) -> Self {
        Choice::new(name, value)
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the CLI result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Just the chosen value.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}
