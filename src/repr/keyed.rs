/*!
# Keyed Representations

[`GraphView`] implementations for graphs whose nodes are arbitrary keys
rather than dense integers:

- `HashMap<N, Vec<(N, E)>, S>`: the common hashed mapping -> sequence
  shape (any hasher, so `fxhash::FxHashMap` qualifies),
- `BTreeMap<N, Vec<(N, E)>>`: same, with deterministic node order,
- `Vec<(N, Vec<(N, E)>)>` / `[(N, Vec<(N, E)>)]`: association lists that
  keep insertion order.

All of them yield owned node/payload clones, so the algorithms can store
them in their private policy maps without borrowing the container.

Hash-based views satisfy the stability contract of [`GraphView`] because a
map that is not mutated replays the same iteration order; only the order
*across* separately built maps is unspecified.

# Examples
```
use std::collections::BTreeMap;
use wdgraphs::prelude::*;

let mut g: BTreeMap<&str, Vec<(&str, f64)>> = BTreeMap::new();
g.insert("a", vec![("b", 1.5)]);
g.insert("b", vec![("a", -0.5)]);

assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["a", "b"]);
assert_eq!(g.number_of_nodes(), 2);
```
*/

use std::{
    collections::{btree_map, hash_map, BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    iter::Map,
    slice,
};

use crate::ops::{AdjEntries, ClonedNodes, GraphView, OutEdges};

type EntryFn<'a, N, E> = fn((&'a N, &'a Vec<(N, E)>)) -> (&'a N, &'a [(N, E)]);
type PairFn<'a, N, E> = fn(&'a (N, Vec<(N, E)>)) -> (&'a N, &'a [(N, E)]);
type PairKeyFn<'a, N, E> = fn(&'a (N, Vec<(N, E)>)) -> &'a N;

fn map_entry<'a, N, E>(entry: (&'a N, &'a Vec<(N, E)>)) -> (&'a N, &'a [(N, E)]) {
    (entry.0, entry.1.as_slice())
}

fn pair_entry<'a, N, E>(pair: &'a (N, Vec<(N, E)>)) -> (&'a N, &'a [(N, E)]) {
    (&pair.0, pair.1.as_slice())
}

fn pair_key<'a, N, E>(pair: &'a (N, Vec<(N, E)>)) -> &'a N {
    &pair.0
}

impl<N, E, S> GraphView for HashMap<N, Vec<(N, E)>, S>
where
    N: Clone + Eq + Hash,
    E: Clone,
    S: BuildHasher,
{
    type Node = N;
    type Edge = E;

    type NodeIter<'a>
        = ClonedNodes<hash_map::Keys<'a, N, Vec<(N, E)>>>
    where
        Self: 'a;

    type OutIter<'a>
        = OutEdges<'a, N, E>
    where
        Self: 'a;

    type AdjIter<'a>
        = AdjEntries<Map<hash_map::Iter<'a, N, Vec<(N, E)>>, EntryFn<'a, N, E>>>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodeIter<'_> {
        ClonedNodes::new(self.keys())
    }

    fn adjacency(&self) -> Self::AdjIter<'_> {
        AdjEntries::new(self.iter().map(map_entry as EntryFn<'_, N, E>))
    }

    fn number_of_nodes(&self) -> usize {
        self.len()
    }
}

impl<N, E> GraphView for BTreeMap<N, Vec<(N, E)>>
where
    N: Clone + Ord + Eq + Hash,
    E: Clone,
{
    type Node = N;
    type Edge = E;

    type NodeIter<'a>
        = ClonedNodes<btree_map::Keys<'a, N, Vec<(N, E)>>>
    where
        Self: 'a;

    type OutIter<'a>
        = OutEdges<'a, N, E>
    where
        Self: 'a;

    type AdjIter<'a>
        = AdjEntries<Map<btree_map::Iter<'a, N, Vec<(N, E)>>, EntryFn<'a, N, E>>>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodeIter<'_> {
        ClonedNodes::new(self.keys())
    }

    fn adjacency(&self) -> Self::AdjIter<'_> {
        AdjEntries::new(self.iter().map(map_entry as EntryFn<'_, N, E>))
    }

    fn number_of_nodes(&self) -> usize {
        self.len()
    }
}

impl<N, E> GraphView for [(N, Vec<(N, E)>)]
where
    N: Clone + Eq + Hash,
    E: Clone,
{
    type Node = N;
    type Edge = E;

    type NodeIter<'a>
        = ClonedNodes<Map<slice::Iter<'a, (N, Vec<(N, E)>)>, PairKeyFn<'a, N, E>>>
    where
        Self: 'a;

    type OutIter<'a>
        = OutEdges<'a, N, E>
    where
        Self: 'a;

    type AdjIter<'a>
        = AdjEntries<Map<slice::Iter<'a, (N, Vec<(N, E)>)>, PairFn<'a, N, E>>>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodeIter<'_> {
        ClonedNodes::new(self.iter().map(pair_key as PairKeyFn<'_, N, E>))
    }

    fn adjacency(&self) -> Self::AdjIter<'_> {
        AdjEntries::new(self.iter().map(pair_entry as PairFn<'_, N, E>))
    }

    fn number_of_nodes(&self) -> usize {
        self.len()
    }
}

impl<N, E> GraphView for Vec<(N, Vec<(N, E)>)>
where
    N: Clone + Eq + Hash,
    E: Clone,
{
    type Node = N;
    type Edge = E;

    type NodeIter<'a>
        = ClonedNodes<Map<slice::Iter<'a, (N, Vec<(N, E)>)>, PairKeyFn<'a, N, E>>>
    where
        Self: 'a;

    type OutIter<'a>
        = OutEdges<'a, N, E>
    where
        Self: 'a;

    type AdjIter<'a>
        = AdjEntries<Map<slice::Iter<'a, (N, Vec<(N, E)>)>, PairFn<'a, N, E>>>
    where
        Self: 'a;

    fn nodes(&self) -> Self::NodeIter<'_> {
        self.as_slice().nodes()
    }

    fn adjacency(&self) -> Self::AdjIter<'_> {
        self.as_slice().adjacency()
    }

    fn number_of_nodes(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashMap;
    use itertools::Itertools;

    use super::*;

    fn collect_edges<G: GraphView>(graph: &G) -> Vec<(G::Node, G::Node, G::Edge)> {
        graph
            .adjacency()
            .flat_map(|(u, nbrs)| nbrs.map(move |(v, e)| (u.clone(), v, e)).collect_vec())
            .collect_vec()
    }

    #[test]
    fn hash_map_view() {
        let mut graph: FxHashMap<u32, Vec<(u32, u32)>> = FxHashMap::default();
        graph.insert(0, vec![(1, 0), (2, 1)]);
        graph.insert(1, vec![(0, 2), (2, 3)]);
        graph.insert(2, vec![(1, 4), (0, 5), (0, 6)]);

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.nodes().sorted().collect_vec(), vec![0, 1, 2]);

        let edges = collect_edges(&graph);
        assert_eq!(edges.len(), 7);
        assert!(edges.contains(&(2, 0, 6)));
    }

    #[test]
    fn btree_map_view_is_ordered() {
        let graph: BTreeMap<&str, Vec<(&str, i32)>> = [
            ("c", vec![("a", 1)]),
            ("a", vec![("b", 2)]),
            ("b", vec![]),
        ]
        .into_iter()
        .collect();

        assert_eq!(graph.nodes().collect_vec(), vec!["a", "b", "c"]);
        assert_eq!(
            collect_edges(&graph),
            vec![("a", "b", 2), ("c", "a", 1)]
        );
    }

    #[test]
    fn association_list_keeps_order() {
        let graph: Vec<(char, Vec<(char, f64)>)> = vec![
            ('x', vec![('y', 0.5)]),
            ('y', vec![('x', -0.5), ('y', 0.0)]),
        ];

        assert_eq!(graph.nodes().collect_vec(), vec!['x', 'y']);
        assert_eq!(
            collect_edges(&graph),
            vec![('x', 'y', 0.5), ('y', 'x', -0.5), ('y', 'y', 0.0)]
        );
    }

    #[test]
    fn empty_views() {
        let graph: FxHashMap<u32, Vec<(u32, u32)>> = FxHashMap::default();
        assert!(graph.is_empty());
        assert_eq!(graph.adjacency().count(), 0);

        let list: Vec<(u32, Vec<(u32, u32)>)> = Vec::new();
        assert!(GraphView::is_empty(&list));
    }
}
