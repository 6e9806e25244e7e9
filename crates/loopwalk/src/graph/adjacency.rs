//! Ordered out-neighbor traversal.
//!
//! This is the only view of a graph that [`CycleEnumerator`](crate::CycleEnumerator) needs.
//! Neighbors are always produced in ascending internal-index order; running out of neighbors is
//! signalled with `None`, never with an error.

use super::matrix::SquareMatrix;

pub trait Adjacency {
    fn vertex_count(&self) -> usize;

    /// Whether the arc `from -> to` is present. Out-of-range indices have no arcs.
    fn has_arc(&self, from: usize, to: usize) -> bool;

    /// Smallest `j` greater than `after` (or `>= 0` when `after` is `None`) with an arc `v -> j`.
    fn next_neighbor(&self, v: usize, after: Option<usize>) -> Option<usize> {
        let start = after.map_or(0, |i| i + 1);
        (start..self.vertex_count()).find(|&j| self.has_arc(v, j))
    }

    fn first_neighbor(&self, v: usize) -> Option<usize> {
        self.next_neighbor(v, None)
    }

    /// The `rank`-th (0-based) out-neighbor of `v`.
    fn nth_neighbor(&self, v: usize, rank: usize) -> Option<usize> {
        let mut cur = self.first_neighbor(v);
        for _ in 0..rank {
            cur = self.next_neighbor(v, Some(cur?));
        }
        cur
    }

    fn successors(&self, v: usize) -> Successors<'_, Self>
    where
        Self: Sized,
    {
        Successors {
            graph: self,
            v,
            last: None,
            done: false,
        }
    }

    fn out_degree(&self, v: usize) -> usize {
        (0..self.vertex_count())
            .filter(|&j| self.has_arc(v, j))
            .count()
    }
}

#[derive(Debug, Clone)]
pub struct Successors<'a, A> {
    graph: &'a A,
    v: usize,
    last: Option<usize>,
    done: bool,
}

impl<A: Adjacency> Iterator for Successors<'_, A> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        let next = self.graph.next_neighbor(self.v, self.last);
        match next {
            Some(j) => self.last = Some(j),
            None => self.done = true,
        }
        next
    }
}

impl Adjacency for SquareMatrix<bool> {
    fn vertex_count(&self) -> usize {
        self.dim()
    }

    fn has_arc(&self, from: usize, to: usize) -> bool {
        self.get(from, to).unwrap_or(false)
    }

    fn next_neighbor(&self, v: usize, after: Option<usize>) -> Option<usize> {
        let row = self.row(v)?;
        let start = after.map_or(0, |i| i + 1);
        row.get(start..)?
            .iter()
            .position(|&present| present)
            .map(|offset| start + offset)
    }
}
