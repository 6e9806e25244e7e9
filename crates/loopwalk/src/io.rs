//! Plain-text matrix format.
//!
//! ```text
//! 3
//! 0 2 0
//! 0 0 1
//! 5 0 0
//! ```
//!
//! The first non-empty line is the vertex count `N`; the next `N` non-empty lines are the rows of
//! an `N x N` matrix of non-negative weights, 0 meaning "no edge". Diagonal weights are ignored
//! when building a graph.

use crate::error::{Error, Result};
use crate::graph::{GraphStore, VertexLabel, Weight};
use std::path::Path;

pub fn parse_matrix(text: &str) -> Result<Vec<Vec<Weight>>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((count_line, count_text)) = lines.next() else {
        return Err(Error::malformed(None, "missing vertex count"));
    };
    let n: usize = count_text.parse().map_err(|_| {
        Error::malformed(
            Some(count_line),
            format!("expected a vertex count, found `{count_text}`"),
        )
    })?;

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        if rows.len() == n {
            return Err(Error::malformed(
                Some(line_no),
                format!("unexpected extra row (matrix is {n}x{n})"),
            ));
        }
        let row = parse_row(line_no, line)?;
        if row.len() != n {
            return Err(Error::malformed(
                Some(line_no),
                format!("expected {n} columns, found {}", row.len()),
            ));
        }
        rows.push(row);
    }
    if rows.len() != n {
        return Err(Error::malformed(
            None,
            format!("expected {n} rows, found {}", rows.len()),
        ));
    }
    Ok(rows)
}

fn parse_row(line_no: usize, line: &str) -> Result<Vec<Weight>> {
    line.split_whitespace()
        .map(|tok| match tok.parse::<Weight>() {
            Ok(w) if w >= 0 => Ok(w),
            Ok(_) => Err(Error::malformed(
                Some(line_no),
                format!("negative weight `{tok}`"),
            )),
            Err(_) => Err(Error::malformed(
                Some(line_no),
                format!("expected an integer weight, found `{tok}`"),
            )),
        })
        .collect()
}

/// Parses `text` and labels the vertices `0..N`.
pub fn read_graph(text: &str) -> Result<GraphStore<usize>> {
    let rows = parse_matrix(text)?;
    GraphStore::from_weight_matrix(0..rows.len(), &rows)
}

/// Parses `text` and labels the vertices with `labels`, which must provide exactly `N` labels.
pub fn read_labeled_graph<K, I>(text: &str, labels: I) -> Result<GraphStore<K>>
where
    K: VertexLabel,
    I: IntoIterator<Item = K>,
{
    let rows = parse_matrix(text)?;
    GraphStore::from_weight_matrix(labels, &rows)
}

/// Reads a matrix file into memory. An unreadable file is reported as malformed input.
pub fn read_matrix_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map_err(|err| Error::malformed(None, format!("cannot read {}: {err}", path.display())))
}

pub fn read_graph_file(path: impl AsRef<Path>) -> Result<GraphStore<usize>> {
    read_graph(&read_matrix_file(path)?)
}

/// Writes the store's weight matrix back in the same format.
pub fn format_matrix<K: VertexLabel>(graph: &GraphStore<K>) -> String {
    let rows = graph.weight_matrix();
    let mut out = format!("{}\n", rows.len());
    for row in rows {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
