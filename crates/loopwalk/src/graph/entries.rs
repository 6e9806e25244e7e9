//! Read-only views handed out by [`GraphStore`](super::GraphStore).

use super::registry::Mark;
use super::Weight;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexEntry<K> {
    pub label: K,
    pub mark: Mark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexView<'a, K> {
    pub index: usize,
    pub label: &'a K,
    pub mark: Mark,
}

/// A present cell of the presence matrix, by internal index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}
