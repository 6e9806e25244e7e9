//! Exhaustive simple-cycle enumeration.
//!
//! For every origin `v0` in ascending index order, a depth-first walk extends the current path
//! with each out-neighbor (ascending order). A neighbor equal to `v0` closes a cycle, which is
//! recorded as `path + [v0]`; a neighbor already on the path is skipped; anything else is
//! explored recursively.
//!
//! The same simple cycle is reported once per vertex it passes through (each vertex is the
//! origin of one rotation). That duplication is part of the output contract; use
//! [`unique_cycles`] when distinct cycles are wanted.

use crate::graph::Adjacency;
use rustc_hash::FxBuildHasher;
use std::fmt;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// A closed simple walk: internal indices, with the origin repeated at the end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle(Vec<usize>);

impl Cycle {
    pub fn origin(&self) -> usize {
        self.0[0]
    }

    /// One less than the number of stored indices, since the origin appears twice.
    pub fn edge_count(&self) -> usize {
        self.0.len() - 1
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// The rotation that starts (and ends) at the smallest index.
    pub fn canonical(&self) -> Cycle {
        let body = &self.0[..self.0.len() - 1];
        let Some((start, _)) = body.iter().enumerate().min_by_key(|&(_, v)| *v) else {
            return self.clone();
        };
        let mut out = Vec::with_capacity(self.0.len());
        out.extend_from_slice(&body[start..]);
        out.extend_from_slice(&body[..start]);
        out.push(body[start]);
        Cycle(out)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Limits for a single run. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// Maximum number of DFS frames entered (one per path extension, origins included).
    pub max_steps: Option<u64>,
    pub max_cycles: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pub cycles: Vec<Cycle>,
    pub steps: u64,
    /// A limit from [`EnumerateOptions`] stopped the walk early.
    pub truncated: bool,
}

/// Borrows the graph for the duration of a run, so it cannot be mutated mid-enumeration.
#[derive(Debug, Clone, Copy)]
pub struct CycleEnumerator<'a, A> {
    graph: &'a A,
    options: EnumerateOptions,
}

impl<'a, A: Adjacency> CycleEnumerator<'a, A> {
    pub fn new(graph: &'a A) -> Self {
        Self {
            graph,
            options: EnumerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EnumerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self) -> Enumeration {
        let n = self.graph.vertex_count();
        let mut walk = Walk {
            graph: self.graph,
            options: self.options,
            origin: 0,
            path: Vec::with_capacity(n),
            on_path: vec![false; n],
            cycles: Vec::new(),
            steps: 0,
            truncated: false,
        };

        for v0 in 0..n {
            walk.origin = v0;
            walk.path.push(v0);
            walk.on_path[v0] = true;
            walk.extend();
            walk.on_path[v0] = false;
            walk.path.pop();
            if walk.truncated {
                break;
            }
        }

        tracing::debug!(
            vertices = n,
            cycles = walk.cycles.len(),
            steps = walk.steps,
            truncated = walk.truncated,
            "cycle enumeration finished"
        );

        Enumeration {
            cycles: walk.cycles,
            steps: walk.steps,
            truncated: walk.truncated,
        }
    }
}

struct Walk<'a, A> {
    graph: &'a A,
    options: EnumerateOptions,
    origin: usize,
    path: Vec<usize>,
    on_path: Vec<bool>,
    cycles: Vec<Cycle>,
    steps: u64,
    truncated: bool,
}

impl<A: Adjacency> Walk<'_, A> {
    fn extend(&mut self) {
        if self.options.max_steps.is_some_and(|max| self.steps >= max) {
            self.truncated = true;
            return;
        }
        self.steps += 1;

        let Some(&v) = self.path.last() else {
            debug_assert!(false, "walk extended with an empty path");
            return;
        };

        let mut next = self.graph.first_neighbor(v);
        while let Some(w) = next {
            if w == self.origin {
                if self.options.max_cycles.is_some_and(|max| self.cycles.len() >= max) {
                    self.truncated = true;
                    return;
                }
                let mut cycle = Vec::with_capacity(self.path.len() + 1);
                cycle.extend_from_slice(&self.path);
                cycle.push(w);
                self.cycles.push(Cycle(cycle));
            } else if !self.on_path[w] {
                self.path.push(w);
                self.on_path[w] = true;
                self.extend();
                self.on_path[w] = false;
                self.path.pop();
                if self.truncated {
                    return;
                }
            }
            next = self.graph.next_neighbor(v, Some(w));
        }
    }
}

/// Runs an unbounded enumeration.
pub fn enumerate<A: Adjacency>(graph: &A) -> Vec<Cycle> {
    CycleEnumerator::new(graph).run().cycles
}

/// Drops rotations of cycles already seen, keeping first-seen order. Each kept cycle is
/// returned as found, not in canonical form.
pub fn unique_cycles(cycles: &[Cycle]) -> Vec<Cycle> {
    let mut seen: HashSet<Cycle> = HashSet::default();
    cycles
        .iter()
        .filter(|c| seen.insert(c.canonical()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Cycle;

    #[test]
    fn canonical_rotates_to_smallest_index() {
        let c = Cycle(vec![3, 1, 2, 3]);
        assert_eq!(c.canonical(), Cycle(vec![1, 2, 3, 1]));
        assert_eq!(c.canonical().canonical(), Cycle(vec![1, 2, 3, 1]));
        assert_eq!(c.edge_count(), 3);
        assert_eq!(c.as_slice().len(), 4);
        assert_eq!(c.origin(), 3);
    }

    #[test]
    fn display_joins_indices() {
        assert_eq!(Cycle(vec![0, 2, 0]).to_string(), "0 2 0");
    }
}
