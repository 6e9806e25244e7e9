//! External label <-> dense internal index bijection.

use super::entries::VertexEntry;
use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Anything usable as an external vertex label (`usize`, `char`, `String`, ...).
pub trait VertexLabel: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> VertexLabel for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

pub type Mark = i32;

#[derive(Debug, Clone)]
pub struct VertexRegistry<K: VertexLabel> {
    entries: Vec<VertexEntry<K>>,
    index: HashMap<K, usize>,
}

impl<K: VertexLabel> Default for VertexRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexLabel> VertexRegistry<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, label: &K) -> bool {
        self.index.contains_key(label)
    }

    /// Registers `label` at the next free index (the current size).
    pub fn add(&mut self, label: K, mark: Mark) -> Result<usize> {
        if self.index.contains_key(&label) {
            return Err(Error::DuplicateVertex {
                label: label.to_string(),
            });
        }
        let idx = self.entries.len();
        self.index.insert(label.clone(), idx);
        self.entries.push(VertexEntry { label, mark });
        Ok(idx)
    }

    /// Unregisters `label` and returns the index it used to occupy. Every index above it moves
    /// down by one.
    pub fn remove(&mut self, label: &K) -> Result<usize> {
        let Some(idx) = self.index.remove(label) else {
            return Err(unknown(label));
        };
        self.entries.remove(idx);
        for i in idx..self.entries.len() {
            if let Some(v) = self.index.get_mut(&self.entries[i].label) {
                *v = i;
            }
        }
        Ok(idx)
    }

    pub fn resolve(&self, label: &K) -> Result<usize> {
        self.index.get(label).copied().ok_or_else(|| unknown(label))
    }

    pub fn label_of(&self, index: usize) -> Result<&K> {
        self.entry(index).map(|e| &e.label)
    }

    pub fn mark(&self, index: usize) -> Result<Mark> {
        self.entry(index).map(|e| e.mark)
    }

    pub fn set_mark(&mut self, label: &K, mark: Mark) -> Result<()> {
        let idx = self.resolve(label)?;
        self.entries[idx].mark = mark;
        Ok(())
    }

    /// Entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &VertexEntry<K>> {
        self.entries.iter()
    }

    fn entry(&self, index: usize) -> Result<&VertexEntry<K>> {
        self.entries.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.entries.len(),
        })
    }
}

pub(crate) fn unknown<K: VertexLabel>(label: &K) -> Error {
    Error::UnknownVertex {
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::VertexRegistry;
    use crate::Error;

    #[test]
    fn indices_stay_dense_after_remove() {
        let mut reg = VertexRegistry::new();
        for c in ['a', 'b', 'c', 'd'] {
            reg.add(c, 0).unwrap();
        }
        assert_eq!(reg.remove(&'b'), Ok(1));

        assert_eq!(reg.resolve(&'a'), Ok(0));
        assert_eq!(reg.resolve(&'c'), Ok(1));
        assert_eq!(reg.resolve(&'d'), Ok(2));
        assert_eq!(reg.label_of(2), Ok(&'d'));
        assert_eq!(
            reg.label_of(3),
            Err(Error::IndexOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn duplicate_and_unknown_labels_are_rejected() {
        let mut reg = VertexRegistry::new();
        reg.add(7usize, 0).unwrap();
        assert_eq!(
            reg.add(7, 1),
            Err(Error::DuplicateVertex {
                label: "7".to_string()
            })
        );
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.mark(0), Ok(0));

        let err = reg.remove(&8).unwrap_err();
        assert!(err.is_unknown_vertex());
        assert!(reg.resolve(&8).unwrap_err().is_unknown_vertex());
    }

    #[test]
    fn marks_follow_their_vertex() {
        let mut reg = VertexRegistry::new();
        reg.add("x".to_string(), 1).unwrap();
        reg.add("y".to_string(), 2).unwrap();
        reg.set_mark(&"y".to_string(), 5).unwrap();
        reg.remove(&"x".to_string()).unwrap();
        assert_eq!(reg.mark(0), Ok(5));
    }
}
