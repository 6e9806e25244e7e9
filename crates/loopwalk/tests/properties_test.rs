use loopwalk::{GraphStore, io};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8, i64),
    RemoveEdge(u8, u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..12).prop_map(Op::AddVertex),
        1 => (0u8..12).prop_map(Op::RemoveVertex),
        3 => (0u8..12, 0u8..12, 1i64..50).prop_map(|(a, b, w)| Op::AddEdge(a, b, w)),
        1 => (0u8..12, 0u8..12).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
    ]
}

fn weight_matrix(max_dim: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
    (0..=max_dim).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0i64..20, n), n).prop_map(
            |mut rows| {
                for (i, row) in rows.iter_mut().enumerate() {
                    row[i] = 0;
                }
                rows
            },
        )
    })
}

proptest! {
    #[test]
    fn indices_stay_dense_and_matrices_square(ops in proptest::collection::vec(op(), 1..80)) {
        let mut g: GraphStore<u8> = GraphStore::new();
        // Model: edge set keyed by label.
        let mut model: Vec<(u8, u8, i64)> = Vec::new();

        for op in ops {
            match op {
                Op::AddVertex(v) => {
                    let existed = g.has_vertex(&v);
                    prop_assert_eq!(g.add_vertex(v).is_ok(), !existed);
                }
                Op::RemoveVertex(v) => {
                    let existed = g.has_vertex(&v);
                    prop_assert_eq!(g.remove_vertex(&v).is_ok(), existed);
                    model.retain(|&(a, b, _)| a != v && b != v);
                }
                Op::AddEdge(a, b, w) => {
                    let ok = g.add_edge_with_weight(&a, &b, w).is_ok();
                    prop_assert_eq!(ok, a != b && g.has_vertex(&a) && g.has_vertex(&b));
                    if ok {
                        model.retain(|&(x, y, _)| (x, y) != (a, b));
                        model.push((a, b, w));
                    }
                }
                Op::RemoveEdge(a, b) => {
                    let had = model.iter().any(|&(x, y, _)| (x, y) == (a, b));
                    prop_assert_eq!(g.remove_edge(&a, &b).is_ok(), had);
                    model.retain(|&(x, y, _)| (x, y) != (a, b));
                }
            }

            let n = g.vertex_count();
            let mut indices: Vec<usize> = g
                .vertices()
                .map(|v| g.registry().resolve(v.label).unwrap())
                .collect();
            indices.sort_unstable();
            prop_assert_eq!(indices, (0..n).collect::<Vec<_>>());

            let presence = g.presence_matrix();
            prop_assert_eq!(presence.len(), n);
            prop_assert!(presence.iter().all(|row| row.len() == n));
            prop_assert_eq!(g.weight_matrix().len(), n);

            prop_assert_eq!(g.edge_count(), model.len());
            for &(a, b, w) in &model {
                prop_assert_eq!(g.edge_weight(&a, &b), Ok(Some(w)));
            }
        }
    }

    #[test]
    fn matrix_round_trip(rows in weight_matrix(7)) {
        let g = GraphStore::from_weight_matrix(0..rows.len(), &rows).unwrap();
        prop_assert_eq!(g.weight_matrix(), rows.clone());

        let presence: Vec<Vec<u8>> = rows
            .iter()
            .map(|row| row.iter().map(|&w| u8::from(w > 0)).collect())
            .collect();
        prop_assert_eq!(g.presence_matrix(), presence);

        let text = io::format_matrix(&g);
        prop_assert_eq!(io::parse_matrix(&text).unwrap(), rows);
    }
}
