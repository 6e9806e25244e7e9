//! Row-major square matrix that resizes one row/column at a time.
//!
//! Both the presence and the weight matrix of [`GraphStore`](super::GraphStore) use this type, so
//! their dimensions can only ever change together through the same two operations.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> SquareMatrix<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![T::default(); dim * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        Some(self.cells[row * self.dim + col])
    }

    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.dim && col < self.dim,
            "cell ({row}, {col}) out of bounds for dim={}",
            self.dim
        );
        self.cells[row * self.dim + col] = value;
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.dim {
            return None;
        }
        Some(&self.cells[row * self.dim..(row + 1) * self.dim])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks_exact(0)` panics, and a 0x0 matrix has no rows anyway.
        self.cells.chunks_exact(self.dim.max(1)).take(self.dim)
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Appends one row and one column filled with `T::default()`.
    pub fn grow(&mut self) {
        let old = self.dim;
        let new = old + 1;
        let mut cells = Vec::with_capacity(new * new);
        for r in 0..old {
            cells.extend_from_slice(&self.cells[r * old..(r + 1) * old]);
            cells.push(T::default());
        }
        cells.resize(new * new, T::default());
        self.cells = cells;
        self.dim = new;
    }

    /// Drops row `idx` and column `idx`; every later row/column moves up by one.
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    pub fn remove(&mut self, idx: usize) {
        assert!(idx < self.dim, "index {idx} out of bounds for dim={}", self.dim);
        let old = self.dim;
        let mut i = 0usize;
        self.cells.retain(|_| {
            let (r, c) = (i / old, i % old);
            i += 1;
            r != idx && c != idx
        });
        self.dim = old - 1;
    }
}
