use std::collections::BTreeMap;

use crate::error::RuntimeError;

/// The variable bindings of one interpretation run.
///
/// Names are restricted to a single uppercase letter `A`-`Z`. Reading a letter
/// that was never assigned yields `0.0`. A store is created by the caller and
/// lent to the evaluator, so independent runs never share state.
///
/// # Example
/// ```
/// use elsif::interpreter::store::Store;
///
/// let mut store = Store::new();
/// store.set("A", 2.5, 1).unwrap();
///
/// assert_eq!(store.get("A", 1).unwrap(), 2.5);
/// assert_eq!(store.get("B", 1).unwrap(), 0.0);
/// assert!(store.set("AB", 1.0, 1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    values: BTreeMap<char, f64>,
}

impl Store {
    /// Creates a store with every letter unassigned.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// Returns [`RuntimeError::NameError`] if `name` is not a single uppercase
    /// letter.
    pub fn get(&self, name: &str, line: usize) -> Result<f64, RuntimeError> {
        let slot = Self::slot(name, line)?;
        Ok(self.values.get(&slot).copied().unwrap_or(0.0))
    }

    /// Binds `value` to a variable, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::NameError`] if `name` is not a single uppercase
    /// letter.
    pub fn set(&mut self, name: &str, value: f64, line: usize) -> Result<(), RuntimeError> {
        let slot = Self::slot(name, line)?;
        self.values.insert(slot, value);
        Ok(())
    }

    /// Returns the value of `letter` without validation, `None` if it was
    /// never assigned or is not a legal name.
    #[must_use]
    pub fn value_of(&self, letter: char) -> Option<f64> {
        self.values.get(&letter).copied()
    }

    /// Iterates over the assigned variables in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }

    /// Number of variables that have been assigned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn slot(name: &str, line: usize) -> Result<char, RuntimeError> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_uppercase() => Ok(letter),
            _ => Err(RuntimeError::NameError { name: name.to_string(),
                                               line }),
        }
    }
}
