#![forbid(unsafe_code)]

//! Dense, matrix-backed directed graph with exhaustive simple-cycle enumeration.
//!
//! `loopwalk` targets small graphs (tens of vertices): adjacency lives in an `N x N` presence
//! matrix with a parallel weight matrix, vertices keep a stable external label while their
//! internal index stays dense, and [`CycleEnumerator`] walks every simple path from every vertex
//! to list the paths that close back on their origin.
//!
//! ```
//! use loopwalk::{enumerate, GraphStore};
//!
//! let mut g = GraphStore::new();
//! for v in ['a', 'b', 'c'] {
//!     g.add_vertex(v)?;
//! }
//! g.add_edge(&'a', &'b')?;
//! g.add_edge(&'b', &'c')?;
//! g.add_edge(&'c', &'a')?;
//!
//! let cycles = enumerate(&g);
//! assert_eq!(cycles.len(), 3); // one per rotation
//! assert_eq!(g.cycle_labels(&cycles[0])?, vec![&'a', &'b', &'c', &'a']);
//! # Ok::<(), loopwalk::Error>(())
//! ```

pub mod cycles;
pub mod error;
pub mod graph;
pub mod io;

pub use cycles::{Cycle, CycleEnumerator, EnumerateOptions, Enumeration, enumerate, unique_cycles};
pub use error::{Error, Result};
pub use graph::{
    Adjacency, DEFAULT_WEIGHT, EdgeView, GraphStore, Mark, SquareMatrix, VertexLabel,
    VertexRegistry, VertexView, Weight,
};
