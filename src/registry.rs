//! Ordered, append-only collection of choices.
//!
//! Positions are 1-based everywhere in the public API, matching what the
//! user sees in enumerated menus.

use crate::error::{Result, SelectError};
use crate::types::Choice;

/// The choices offered by one select session, in insertion order.
#[derive(Debug)]
pub struct ChoiceRegistry<T> {
    choices: Vec<Choice<T>>,
}

impl<T> Default for ChoiceRegistry<T> {
    fn default() -> Self {
        ChoiceRegistry { choices: Vec::new() }
    }
}

impl<T> ChoiceRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry at the end. Names need not be unique.
    pub fn append(&mut self, name: impl Into<String>, value: T) {
        self.choices.push(Choice::new(name, value));
    }

    /// Add one entry that runs `action` if it is the confirmed result.
    pub fn append_with_action(
        &mut self,
        name: impl Into<String>,
        value: T,
        action: impl Fn(&T) + 'static,
    ) {
        self.choices.push(Choice::with_action(name, value, action));
    }

    /// Add a prebuilt choice.
    pub fn push(&mut self, choice: Choice<T>) {
        self.choices.push(choice);
    }

    /// Bulk insertion, preserving the iterator's order.
    pub fn append_all<N, I>(&mut self, entries: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, T)>,
    {
        self.choices
            .extend(entries.into_iter().map(|(name, value)| Choice::new(name, value)));
    }

    pub fn size(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Choice at 1-based `index`.
    pub fn at(&self, index: usize) -> Result<&Choice<T>> {
        self.check(index)?;
        Ok(&self.choices[index - 1])
    }

    /// Consume the registry, keeping only the choice at 1-based `index`.
    pub fn into_choice(mut self, index: usize) -> Result<Choice<T>> {
        self.check(index)?;
        Ok(self.choices.swap_remove(index - 1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Choice<T>> {
        self.choices.iter()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index == 0 || index > self.choices.len() {
            return Err(SelectError::Index {
                index,
                size: self.choices.len(),
            });
        }
        Ok(())
    }
}

impl<N: Into<String>, T> FromIterator<(N, T)> for ChoiceRegistry<T> {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut registry = ChoiceRegistry::new();
        registry.append_all(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> ChoiceRegistry<i32> {
        [("Apple", 1), ("Banana", 2), ("Cherry", 3)].into_iter().collect()
    }

    #[test]
    fn append_preserves_order() {
        let registry = fruit();
        let names: Vec<&str> = registry.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Apple", "Banana", "Cherry"]);
        assert_eq!(registry.size(), 3);
    }

    #[test]
    fn at_is_one_based() {
        let registry = fruit();
        assert_eq!(registry.at(1).unwrap().name(), "Apple");
        assert_eq!(*registry.at(3).unwrap().value(), 3);
    }

    #[test]
    fn at_rejects_zero_and_past_end() {
        let registry = fruit();
        assert!(matches!(
            registry.at(0),
            Err(SelectError::Index { index: 0, size: 3 })
        ));
        assert!(matches!(
            registry.at(4),
            Err(SelectError::Index { index: 4, size: 3 })
        ));
    }

    #[test]
    fn duplicate_names_are_distinct_entries() {
        let mut registry = ChoiceRegistry::new();
        registry.append("same", 'a');
        registry.append("same", 'b');
        assert_eq!(registry.size(), 2);
        assert_eq!(*registry.at(2).unwrap().value(), 'b');
    }

    #[test]
    fn into_choice_moves_the_selected_entry() {
        let registry = fruit();
        let choice = registry.into_choice(2).unwrap();
        assert_eq!(choice.name(), "Banana");
        assert_eq!(choice.resolve(), 2);
    }

    #[test]
    fn into_choice_checks_bounds() {
        let registry: ChoiceRegistry<i32> = ChoiceRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.into_choice(1),
            Err(SelectError::Index { index: 1, size: 0 })
        ));
    }

    #[test]
    fn append_with_action_is_recorded() {
        let mut registry = ChoiceRegistry::new();
        registry.append_with_action("run", (), |_| {});
        assert!(registry.at(1).unwrap().has_action());
    }
}
