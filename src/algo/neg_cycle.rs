/*!
# Negative Cycle Detection

Negative-cycle detection for weighted directed graphs by **Howard's
policy-iteration method**.

Note: Bellman-Ford's shortest-path algorithm is *not* the best way to
detect negative cycles, because

1. it needs a source node,
2. it only reports a negative cycle at its final stage, and
3. it restarts the distance solution on every query.

Howard's method instead maintains a *predecessor policy* (for every node
the currently best incoming edge) and alternates full relaxation sweeps
with cycle searches on the policy graph. Any cycle in the policy graph is
a negative cycle of the underlying graph, and distances keep improving
across queries instead of being recomputed.

## Laziness

[`NegCycleFinder::howard`] returns an [`Iterator`] over cycles. Relaxation
and cycle search happen on demand between the yielded items: a caller that
stops after the first cycle does not pay for the enumeration of the rest.
The iteration ends after the first relaxation pass that produced at least
one cycle (the caller has enough to make progress), or as soon as a sweep
changes no distance.
*/

use std::{marker::PhantomData, ops::Add};

use fxhash::FxHashMap;

use crate::{ops::GraphView, utils::DistanceMap};

/// A cycle reconstructed from a relaxation policy: the ordered list of the
/// edge payloads along it.
pub type Cycle<E> = Vec<E>;

/// Policy mapping: each reached node to its current best
/// (neighbor, connecting edge) pair.
pub(crate) type Policy<G> =
    FxHashMap<<G as GraphView>::Node, (<G as GraphView>::Node, <G as GraphView>::Edge)>;

/// Negative cycle finder by Howard's method.
///
/// Constructed once around a borrowed graph view and reusable across
/// multiple [`NegCycleFinder::howard`] invocations; each invocation resets
/// the internal policy state.
pub struct NegCycleFinder<'g, G>
where
    G: GraphView,
{
    digraph: &'g G,
    pred: Policy<G>,
}

impl<'g, G> NegCycleFinder<'g, G>
where
    G: GraphView,
{
    /// Creates a finder over the given graph view.
    pub fn new(digraph: &'g G) -> Self {
        Self {
            digraph,
            pred: FxHashMap::default(),
        }
    }

    /// Lazily enumerates negative cycles under the weights produced by
    /// `weight_of`, updating `dist` in place.
    ///
    /// The produced sequence is empty iff the graph has no negative cycle
    /// under `weight_of`. The detection outcome does not depend on the
    /// initial contents of `dist`, only the final distance values do.
    ///
    /// **Panics if an edge target is missing from `dist`** (a malformed
    /// graph view or distance map, see the module contract).
    pub fn howard<'f, D, M, W>(
        &'f mut self,
        dist: &'f mut M,
        weight_of: W,
    ) -> NegCycles<'g, 'f, G, D, M, W>
    where
        D: Clone + PartialOrd + Add<Output = D>,
        M: DistanceMap<G::Node, D>,
        W: Fn(&G::Edge) -> D,
    {
        self.pred.clear();
        NegCycles {
            finder: self,
            dist,
            weight_of,
            search: None,
            found: false,
            exhausted: false,
            _domain: PhantomData,
        }
    }

    /// One relaxation sweep over all edges in adjacency order. Returns
    /// whether any distance changed.
    fn relax<D, M, W>(&mut self, dist: &mut M, weight_of: &W) -> bool
    where
        D: Clone + PartialOrd + Add<Output = D>,
        M: DistanceMap<G::Node, D>,
        W: Fn(&G::Edge) -> D,
    {
        let digraph = self.digraph;
        let mut changed = false;
        for (utx, nbrs) in digraph.adjacency() {
            for (vtx, edge) in nbrs {
                let distance = dist.get(&utx).clone() + weight_of(&edge);
                if *dist.get(&vtx) > distance {
                    dist.set(&vtx, distance);
                    self.pred.insert(vtx.clone(), (utx.clone(), edge));
                    changed = true;
                }
            }
        }
        changed
    }

    /// Reconstructs the cycle through `handle` by walking the predecessor
    /// policy until it returns to `handle`.
    fn cycle_list(&self, handle: &G::Node) -> Cycle<G::Edge> {
        let mut vtx = handle.clone();
        let mut cycle = Vec::new();
        loop {
            let (utx, edge) = &self.pred[&vtx];
            cycle.push(edge.clone());
            vtx = utx.clone();
            if vtx == *handle {
                break;
            }
        }
        cycle
    }

    /// Verifies that the policy cycle through `handle` is negative: some
    /// edge on it still admits a strict relaxation.
    fn is_negative<D, M, W>(&self, handle: &G::Node, dist: &M, weight_of: &W) -> bool
    where
        D: Clone + PartialOrd + Add<Output = D>,
        M: DistanceMap<G::Node, D>,
        W: Fn(&G::Edge) -> D,
    {
        let mut vtx = handle.clone();
        loop {
            let (utx, edge) = &self.pred[&vtx];
            if *dist.get(&vtx) > dist.get(utx).clone() + weight_of(edge) {
                return true;
            }
            vtx = utx.clone();
            if vtx == *handle {
                break;
            }
        }
        false
    }
}

/// Walks a policy map from every seed node, yielding each node that
/// closes a cycle with its own seed.
///
/// Every node has at most one outgoing policy edge, so each walk traces a
/// rho shape: a tail ending in either a dead end or a cycle. A node
/// visited from an earlier seed is already classified and never
/// revisited; only a node re-reached under the *current* seed closes a
/// new cycle.
pub(crate) struct PolicySearch<'g, G>
where
    G: GraphView + 'g,
{
    nodes: G::NodeIter<'g>,
    visited: FxHashMap<G::Node, G::Node>,
}

impl<'g, G> PolicySearch<'g, G>
where
    G: GraphView + 'g,
{
    pub(crate) fn new(digraph: &'g G) -> Self {
        Self {
            nodes: digraph.nodes(),
            visited: FxHashMap::default(),
        }
    }

    /// Advances the search over `policy`, returning the next cycle-entry
    /// node.
    pub(crate) fn next_entry(&mut self, policy: &Policy<G>) -> Option<G::Node> {
        for vtx in self.nodes.by_ref() {
            if self.visited.contains_key(&vtx) {
                continue;
            }
            let mut utx = vtx.clone();
            loop {
                self.visited.insert(utx.clone(), vtx.clone());
                let Some((next, _)) = policy.get(&utx) else {
                    break;
                };
                utx = next.clone();
                if let Some(seed) = self.visited.get(&utx) {
                    if *seed == vtx {
                        return Some(utx);
                    }
                    break;
                }
            }
        }
        None
    }
}

/// Lazy iterator over the negative cycles found by
/// [`NegCycleFinder::howard`].
///
/// Holds the relaxation state between yields; dropping it abandons the
/// enumeration without further work.
pub struct NegCycles<'g, 'f, G, D, M, W>
where
    G: GraphView,
{
    finder: &'f mut NegCycleFinder<'g, G>,
    dist: &'f mut M,
    weight_of: W,
    search: Option<PolicySearch<'g, G>>,
    found: bool,
    exhausted: bool,
    _domain: PhantomData<D>,
}

impl<G, D, M, W> Iterator for NegCycles<'_, '_, G, D, M, W>
where
    G: GraphView,
    D: Clone + PartialOrd + Add<Output = D>,
    M: DistanceMap<G::Node, D>,
    W: Fn(&G::Edge) -> D,
{
    type Item = Cycle<G::Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.exhausted {
                return None;
            }

            if let Some(search) = self.search.as_mut() {
                if let Some(handle) = search.next_entry(&self.finder.pred) {
                    debug_assert!(self.finder.is_negative(
                        &handle,
                        &*self.dist,
                        &self.weight_of
                    ));
                    self.found = true;
                    return Some(self.finder.cycle_list(&handle));
                }

                self.search = None;
                if self.found {
                    self.exhausted = true;
                    return None;
                }
            }

            if !self.finder.relax(&mut *self.dist, &self.weight_of) {
                self.exhausted = true;
                return None;
            }
            self.search = Some(PolicySearch::new(self.finder.digraph));
        }
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashMap;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn howard_cycles(graph: &Vec<Vec<(usize, f64)>>, dist: &mut Vec<f64>) -> Vec<Cycle<f64>> {
        let mut ncf = NegCycleFinder::new(graph);
        ncf.howard(dist, |e: &f64| *e).collect_vec()
    }

    #[test]
    fn positive_triangle_with_parallel_edges() {
        let graph: Vec<Vec<(usize, f64)>> = vec![
            vec![(1, 7.0), (2, 5.0)],
            vec![(0, 0.0), (2, 3.0)],
            vec![(1, 1.0), (0, 2.0), (0, 1.0)],
        ];
        let mut dist = vec![0.0; 3];
        assert!(howard_cycles(&graph, &mut dist).is_empty());
    }

    #[test]
    fn plain_negative_cycle() {
        let graph: Vec<Vec<(usize, f64)>> =
            vec![vec![(1, 1.0)], vec![(2, -3.0)], vec![(0, 1.0)]];
        let mut dist = vec![0.0; 3];

        let cycles = howard_cycles(&graph, &mut dist);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 3);
        assert_eq!(cycles[0].iter().sum::<f64>(), -1.0);
    }

    #[test]
    fn self_loop_is_a_one_edge_cycle() {
        let graph: Vec<Vec<(usize, f64)>> = vec![vec![(0, -1.0)]];
        let mut dist = vec![0.0];
        let cycles = howard_cycles(&graph, &mut dist);
        assert_eq!(cycles, vec![vec![-1.0]]);

        let graph: Vec<Vec<(usize, f64)>> = vec![vec![(0, 1.0)]];
        let mut dist = vec![0.0];
        assert!(howard_cycles(&graph, &mut dist).is_empty());
    }

    #[test]
    fn negative_chain_is_acyclic() {
        let n = 8;
        let graph: Vec<Vec<(usize, f64)>> = (0..n)
            .map(|u| {
                if u + 1 < n {
                    vec![(u + 1, -(u as f64) - 1.0)]
                } else {
                    vec![]
                }
            })
            .collect();

        let mut dist = vec![0.0; n];
        assert!(howard_cycles(&graph, &mut dist).is_empty());
    }

    #[test]
    fn empty_graph_yields_nothing() {
        let graph: Vec<Vec<(usize, f64)>> = vec![];
        let mut dist: Vec<f64> = vec![];
        assert!(howard_cycles(&graph, &mut dist).is_empty());
    }

    #[test]
    fn keyed_graph_with_shared_weights() {
        // Payloads are indices into a weight table, as in timing graphs.
        let mut graph: FxHashMap<u32, Vec<(u32, u32)>> = FxHashMap::default();
        graph.insert(0, vec![(1, 0), (2, 1)]);
        graph.insert(1, vec![(0, 2), (2, 3)]);
        graph.insert(2, vec![(1, 4), (0, 5), (0, 6)]);
        let weight = [7.0, 5.0, 0.0, 3.0, 1.0, 2.0, 1.0];

        let mut dist: FxHashMap<u32, f64> = (0..3).map(|v| (v, 0.0)).collect();
        let mut ncf = NegCycleFinder::new(&graph);
        assert_eq!(
            ncf.howard(&mut dist, |e: &u32| weight[*e as usize]).count(),
            0
        );
    }

    #[test]
    fn initial_distances_do_not_change_detection() {
        let negative: Vec<Vec<(usize, f64)>> =
            vec![vec![(1, 1.0)], vec![(2, -3.0)], vec![(0, 1.0)]];
        let positive: Vec<Vec<(usize, f64)>> =
            vec![vec![(1, 1.0)], vec![(2, 3.0)], vec![(0, 1.0)]];

        for init in [[0.0, 0.0, 0.0], [10.0, -5.0, 3.0], [-1.0, -1.0, -1.0]] {
            let mut dist = init.to_vec();
            assert!(!howard_cycles(&negative, &mut dist).is_empty());

            let mut dist = init.to_vec();
            assert!(howard_cycles(&positive, &mut dist).is_empty());
        }
    }

    #[test]
    fn finder_is_reusable() {
        let graph: Vec<Vec<(usize, f64)>> =
            vec![vec![(1, 1.0)], vec![(2, -3.0)], vec![(0, 1.0)]];
        let mut ncf = NegCycleFinder::new(&graph);

        let mut dist = vec![0.0; 3];
        let first = ncf.howard(&mut dist, |e: &f64| *e).collect_vec();

        let mut dist = vec![0.0; 3];
        let second = ncf.howard(&mut dist, |e: &f64| *e).collect_vec();

        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn enumeration_can_be_abandoned() {
        let graph: Vec<Vec<(usize, f64)>> =
            vec![vec![(1, -1.0)], vec![(0, -1.0)], vec![(2, -5.0)]];
        let mut dist = vec![0.0; 3];

        let mut ncf = NegCycleFinder::new(&graph);
        let first = ncf.howard(&mut dist, |e: &f64| *e).next();
        assert!(first.is_some());
        assert!(first.unwrap().iter().sum::<f64>() < 0.0);
    }

    #[test]
    fn random_nonnegative_graphs_yield_nothing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..200 {
            let n = rng.random_range(1..10);
            let m = rng.random_range(0..20);

            let mut graph: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
            for _ in 0..m {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                graph[u].push((v, rng.random_range(0.0..10.0)));
            }

            let mut dist = vec![0.0; n];
            assert!(howard_cycles(&graph, &mut dist).is_empty());
        }
    }

    #[test]
    fn planted_negative_cycle_is_found_and_sound() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..200 {
            let n = rng.random_range(3..10);
            let m = rng.random_range(0..15);

            let mut graph: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
            for _ in 0..m {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                graph[u].push((v, rng.random_range(0.0..10.0)));
            }

            // Plant a cycle 0 -> 1 -> ... -> k-1 -> 0 with strictly
            // negative total weight.
            let k = rng.random_range(2..=n);
            for u in 0..k {
                graph[u].push(((u + 1) % k, -1.0));
            }

            let mut dist = vec![0.0; n];
            let cycles = howard_cycles(&graph, &mut dist);
            assert!(!cycles.is_empty());
            for cycle in cycles {
                assert!(cycle.iter().sum::<f64>() < 0.0);
            }
        }
    }
}
