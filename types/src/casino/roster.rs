use std::ops::Index;
use thiserror::Error as ThisError;

/// An entity addressable by a unique display name.
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum RosterError {
    #[error("name already present in roster: {0}")]
    DuplicateName(String),
    #[error("index out of range (index={index}, len={len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Insertion-ordered collection of uniquely named entities.
///
/// Iteration, positional access and scans all follow the order entities were appended in;
/// removal keeps the relative order of everything else.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster<T> {
    entries: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Named> Roster<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries whose names are known to be distinct.
    pub(crate) fn from_unique(entries: Vec<T>) -> Self {
        debug_assert!(entries
            .iter()
            .enumerate()
            .all(|(i, entry)| entries[..i].iter().all(|other| other.name() != entry.name())));
        Self { entries }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }

    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.iter_mut().find(|entry| entry.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Append an entity, rejecting a name that is already taken.
    pub fn push(&mut self, entry: T) -> Result<(), RosterError> {
        if self.contains(entry.name()) {
            return Err(RosterError::DuplicateName(entry.name().to_string()));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entity with `name`, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let index = self.position(name)?;
        Some(self.entries.remove(index))
    }

    /// Replace the entity at `index`, returning the previous one.
    ///
    /// The new name may match the entity being replaced but no other.
    pub fn set(&mut self, index: usize, entry: T) -> Result<T, RosterError> {
        let len = self.entries.len();
        if index >= len {
            return Err(RosterError::IndexOutOfRange { index, len });
        }
        if matches!(self.position(entry.name()), Some(other) if other != index) {
            return Err(RosterError::DuplicateName(entry.name().to_string()));
        }
        Ok(std::mem::replace(&mut self.entries[index], entry))
    }

    /// Remove the entity at `index`, shifting later ones down.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Named::name)
    }
}

impl<T: Named + PartialEq> Roster<T> {
    /// Whether an entity equal to `entry` (name and state) is present.
    pub fn contains_value(&self, entry: &T) -> bool {
        self.entries.contains(entry)
    }

    /// Remove the entity equal to `entry`, if any.
    pub fn remove_value(&mut self, entry: &T) -> Option<T> {
        let index = self.entries.iter().position(|other| other == entry)?;
        Some(self.entries.remove(index))
    }
}

impl<T> Index<usize> for Roster<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a, T> IntoIterator for &'a Roster<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
