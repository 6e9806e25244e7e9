//! Matrix-backed directed graph container.
//!
//! Vertices are addressed by an external label (`usize`, `char`, ...) and stored at a dense
//! internal index. Edges are not a list: an edge is a set cell of the presence matrix, with its
//! weight in the parallel weight matrix. Both matrices are always `vertex_count() x
//! vertex_count()`.
//!
//! Every fallible operation validates before it mutates, so an `Err` leaves the store exactly as
//! it was.

mod adjacency;
mod entries;
mod matrix;
mod registry;

pub use adjacency::{Adjacency, Successors};
pub use entries::{EdgeView, VertexEntry, VertexView};
pub use matrix::SquareMatrix;
pub use registry::{Mark, VertexLabel, VertexRegistry};

use crate::cycles::Cycle;
use crate::error::{Error, Result};

pub type Weight = i64;

pub const DEFAULT_WEIGHT: Weight = 1;

#[derive(Debug, Clone)]
pub struct GraphStore<K: VertexLabel> {
    registry: VertexRegistry<K>,
    presence: SquareMatrix<bool>,
    weights: SquareMatrix<Weight>,
}

impl<K: VertexLabel> Default for GraphStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexLabel> GraphStore<K> {
    pub fn new() -> Self {
        Self {
            registry: VertexRegistry::new(),
            presence: SquareMatrix::new(0),
            weights: SquareMatrix::new(0),
        }
    }

    /// Builds a store from a weight matrix.
    ///
    /// Cells `<= 0` mean "no edge" and diagonal cells are skipped, matching the on-disk matrix
    /// format. `labels` must yield exactly one label per row.
    pub fn from_weight_matrix<I>(labels: I, rows: &[Vec<Weight>]) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut g = Self::new();
        for label in labels {
            g.add_vertex(label)?;
        }
        let n = g.vertex_count();
        if rows.len() != n {
            return Err(Error::malformed(
                None,
                format!("expected {n} matrix rows, found {}", rows.len()),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::malformed(
                    None,
                    format!("matrix row {i} has {} columns, expected {n}", row.len()),
                ));
            }
            for (j, &w) in row.iter().enumerate() {
                if i != j && w > 0 {
                    g.set_cell(i, j, w);
                }
            }
        }
        tracing::debug!(
            vertices = n,
            edges = g.edge_count(),
            "built graph from weight matrix"
        );
        Ok(g)
    }

    pub fn registry(&self) -> &VertexRegistry<K> {
        &self.registry
    }

    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.presence
            .rows()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }

    pub fn has_vertex(&self, label: &K) -> bool {
        self.registry.contains(label)
    }

    pub fn add_vertex(&mut self, label: K) -> Result<usize> {
        self.add_vertex_with_mark(label, 0)
    }

    pub fn add_vertex_with_mark(&mut self, label: K, mark: Mark) -> Result<usize> {
        let idx = self.registry.add(label, mark)?;
        self.presence.grow();
        self.weights.grow();
        debug_assert_eq!(self.presence.dim(), self.registry.len());
        tracing::trace!(index = idx, "vertex added");
        Ok(idx)
    }

    /// Removes the vertex and every edge touching it. Vertices above it shift down one index.
    pub fn remove_vertex(&mut self, label: &K) -> Result<()> {
        let idx = self.registry.resolve(label)?;
        self.presence.remove(idx);
        self.weights.remove(idx);
        self.registry.remove(label)?;
        debug_assert_eq!(self.weights.dim(), self.registry.len());
        tracing::trace!(index = idx, "vertex removed");
        Ok(())
    }

    pub fn vertex_mark(&self, label: &K) -> Result<Mark> {
        let idx = self.registry.resolve(label)?;
        self.registry.mark(idx)
    }

    pub fn set_vertex_mark(&mut self, label: &K, mark: Mark) -> Result<()> {
        self.registry.set_mark(label, mark)
    }

    pub fn add_edge(&mut self, from: &K, to: &K) -> Result<()> {
        self.add_edge_with_weight(from, to, DEFAULT_WEIGHT)
    }

    /// Inserts or overwrites the edge `from -> to`.
    ///
    /// A weight of 0 is a present, zero-weight edge here; only the matrix loader treats 0 as
    /// absence.
    pub fn add_edge_with_weight(&mut self, from: &K, to: &K, weight: Weight) -> Result<()> {
        let (i, j) = self.resolve_pair(from, to)?;
        if i == j {
            return Err(Error::SelfLoop {
                label: from.to_string(),
            });
        }
        self.set_cell(i, j, weight);
        tracing::trace!(from = i, to = j, weight, "edge set");
        Ok(())
    }

    /// Removes `from -> to` and returns the weight it had.
    pub fn remove_edge(&mut self, from: &K, to: &K) -> Result<Weight> {
        let (i, j) = self.existing_edge(from, to)?;
        let weight = self.weights.get(i, j).unwrap_or_default();
        self.presence.set(i, j, false);
        self.weights.set(i, j, 0);
        tracing::trace!(from = i, to = j, "edge removed");
        Ok(weight)
    }

    pub fn set_edge_weight(&mut self, from: &K, to: &K, weight: Weight) -> Result<()> {
        let (i, j) = self.existing_edge(from, to)?;
        self.weights.set(i, j, weight);
        Ok(())
    }

    /// `false` for unknown labels as well as for absent edges.
    pub fn has_edge(&self, from: &K, to: &K) -> bool {
        match self.resolve_pair(from, to) {
            Ok((i, j)) => self.presence.has_arc(i, j),
            Err(_) => false,
        }
    }

    pub fn edge_weight(&self, from: &K, to: &K) -> Result<Option<Weight>> {
        let (i, j) = self.resolve_pair(from, to)?;
        Ok(self.weight_at(i, j))
    }

    /// Weight of the edge between two internal indices, if present.
    pub fn weight_at(&self, from: usize, to: usize) -> Option<Weight> {
        if !self.presence.has_arc(from, to) {
            return None;
        }
        self.weights.get(from, to)
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexView<'_, K>> {
        self.registry
            .iter()
            .enumerate()
            .map(|(index, e)| VertexView {
                index,
                label: &e.label,
                mark: e.mark,
            })
    }

    /// Present edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView> + '_ {
        (0..self.vertex_count()).flat_map(move |from| {
            self.presence.successors(from).map(move |to| EdgeView {
                from,
                to,
                weight: self.weights.get(from, to).unwrap_or_default(),
            })
        })
    }

    /// Presence matrix as 0/1 rows.
    pub fn presence_matrix(&self) -> Vec<Vec<u8>> {
        self.presence
            .rows()
            .map(|row| row.iter().map(|&p| u8::from(p)).collect())
            .collect()
    }

    /// Weight matrix with absent cells reported as 0.
    pub fn weight_matrix(&self) -> Vec<Vec<Weight>> {
        self.presence
            .rows()
            .zip(self.weights.rows())
            .map(|(p, w)| {
                p.iter()
                    .zip(w)
                    .map(|(&p, &w)| if p { w } else { 0 })
                    .collect()
            })
            .collect()
    }

    pub fn label_of(&self, index: usize) -> Result<&K> {
        self.registry.label_of(index)
    }

    pub fn cycle_labels(&self, cycle: &Cycle) -> Result<Vec<&K>> {
        cycle.iter().map(|i| self.registry.label_of(i)).collect()
    }

    fn set_cell(&mut self, i: usize, j: usize, weight: Weight) {
        self.presence.set(i, j, true);
        self.weights.set(i, j, weight);
    }

    fn resolve_pair(&self, from: &K, to: &K) -> Result<(usize, usize)> {
        Ok((self.registry.resolve(from)?, self.registry.resolve(to)?))
    }

    fn existing_edge(&self, from: &K, to: &K) -> Result<(usize, usize)> {
        let (i, j) = self.resolve_pair(from, to)?;
        if !self.presence.has_arc(i, j) {
            return Err(Error::NoSuchEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok((i, j))
    }
}

impl<K: VertexLabel> Adjacency for GraphStore<K> {
    fn vertex_count(&self) -> usize {
        self.presence.dim()
    }

    fn has_arc(&self, from: usize, to: usize) -> bool {
        self.presence.has_arc(from, to)
    }

    fn next_neighbor(&self, v: usize, after: Option<usize>) -> Option<usize> {
        self.presence.next_neighbor(v, after)
    }
}
