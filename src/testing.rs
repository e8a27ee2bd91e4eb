/// Every integer-indexed graph view should report its nodes in index order
/// and replay exactly the edges it was built from.
macro_rules! test_graph_view {
    ($env:ident, $build:expr) => {
        #[cfg(test)]
        mod $env {
            use crate::ops::GraphView;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m` random weighted edges over nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: usize, m: usize) -> Vec<(usize, usize, i64)> {
                (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w = rng.random_range(-100..100);
                        (u, v, w)
                    })
                    .collect_vec()
            }

            #[test]
            fn nodes_in_index_order() {
                for n in [0usize, 1, 7, 31] {
                    let graph = ($build)(n, Vec::new());
                    assert_eq!(graph.nodes().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.is_empty(), n == 0);
                }
            }

            #[test]
            fn adjacency_replays_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1usize, 10, 25] {
                    for m in [0, n, 4 * n] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m);
                            let graph = ($build)(n, edges.clone());

                            let mut seen = graph
                                .adjacency()
                                .flat_map(|(u, nbrs)| {
                                    nbrs.map(move |(v, w)| (u, v, w)).collect_vec()
                                })
                                .collect_vec();
                            seen.sort_unstable();

                            let mut want = edges;
                            want.sort_unstable();

                            assert_eq!(seen, want);
                        }
                    }
                }
            }

            #[test]
            fn repeated_iteration_is_stable() {
                let rng = &mut Pcg64Mcg::seed_from_u64(9);
                let edges = random_edges(rng, 12, 40);
                let graph = ($build)(12, edges);

                let first = graph
                    .adjacency()
                    .flat_map(|(u, nbrs)| nbrs.map(move |(v, w)| (u, v, w)).collect_vec())
                    .collect_vec();
                let second = graph
                    .adjacency()
                    .flat_map(|(u, nbrs)| nbrs.map(move |(v, w)| (u, v, w)).collect_vec())
                    .collect_vec();

                assert_eq!(first, second);
            }
        }
    };
}

pub(crate) use test_graph_view;
